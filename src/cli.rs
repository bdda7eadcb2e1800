//! File-based recoloring used by the `recolor` command.

use cvd_transform::Deficiency;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::CodecError;
use crate::rendering::codec;
use crate::services::RecolorService;

/// Numbered deficiency menu shown when no deficiency is given
pub fn menu_prompt() -> String {
    let mut menu = String::new();
    for (i, deficiency) in Deficiency::ALL.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", i + 1, deficiency));
    }
    menu.push_str(": ");
    menu
}

/// Parse a menu answer: the entry number or the exact deficiency name
pub fn parse_menu_choice(input: &str) -> Option<Deficiency> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| Deficiency::ALL.get(i))
            .copied();
    }
    input.parse().ok()
}

/// Show the menu on `output` and read one answer from `input`
pub fn prompt_deficiency(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Deficiency> {
    output.write_all(menu_prompt().as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_menu_choice(&line)
        .ok_or_else(|| anyhow::anyhow!("Invalid selection '{}'", line.trim()))
}

/// Files written by [`recolor_file`]
#[derive(Debug)]
pub struct RecolorReport {
    pub simulated: PathBuf,
    pub daltonized: PathBuf,
    pub recolored: PathBuf,
    pub panels: Option<PathBuf>,
}

impl RecolorReport {
    /// All written paths in write order
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths = vec![
            self.simulated.as_path(),
            self.daltonized.as_path(),
            self.recolored.as_path(),
        ];
        if let Some(panels) = &self.panels {
            paths.push(panels.as_path());
        }
        paths
    }
}

/// Recolor `input` and write the stage images (and optionally the
/// comparison panels) as PNG files into `output_dir`.
///
/// Files are named `<stem>-simulated.png`, `<stem>-daltonized.png`,
/// `<stem>-recolored.png` and `<stem>-panels.png`.
pub fn recolor_file(
    service: &RecolorService,
    input: &Path,
    deficiency: Deficiency,
    output_dir: &Path,
    with_panels: bool,
) -> Result<RecolorReport, CodecError> {
    let bytes = std::fs::read(input)?;
    let output = service.recolor_bytes(&bytes, deficiency)?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let path_for = |suffix: &str| output_dir.join(format!("{stem}-{suffix}.png"));

    std::fs::create_dir_all(output_dir)?;

    let report = RecolorReport {
        simulated: path_for("simulated"),
        daltonized: path_for("daltonized"),
        recolored: path_for("recolored"),
        panels: with_panels.then(|| path_for("panels")),
    };

    codec::save_png(&report.simulated, &output.result.simulated)?;
    codec::save_png(&report.daltonized, &output.result.daltonized)?;
    codec::save_png(&report.recolored, &output.result.recolored)?;
    if let Some(path) = &report.panels {
        codec::save_png(path, &output.panels())?;
    }

    tracing::info!(
        input = %input.display(),
        deficiency = %deficiency,
        files = report.paths().len(),
        "Recolored file"
    );

    Ok(report)
}
