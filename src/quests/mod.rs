pub mod questname;
pub mod reference_list;
