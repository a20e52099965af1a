//! UIコンポーネント

pub mod header;
pub mod input_form;
pub mod personal_info;
pub mod grade_group;
pub mod legacy_result;
pub mod standard_result;
