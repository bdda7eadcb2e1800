pub mod correct;
pub mod info;

pub use correct::__path_handle_correct;
pub use correct::{handle_correct, CorrectErrorResponse, CorrectUpload, IMAGE_FIELD};
pub use info::{__path_handle_deficiencies, __path_handle_index};
pub use info::{
    handle_deficiencies, handle_index, DeficienciesResponse, DeficiencyInfo, IndexResponse,
};
