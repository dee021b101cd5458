pub mod poem_txt;
pub mod utility;
