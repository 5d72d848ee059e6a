pub mod use_pagination;
