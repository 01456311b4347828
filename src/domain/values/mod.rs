pub mod alias;
pub mod jalali;
pub mod source_id;
pub mod title_case;
