pub(super) mod filter_bar;
pub(super) mod input_box;
pub(super) mod status;
pub(super) mod task_table;
pub(super) mod util;

#[cfg(test)]
pub(super) use util::truncate_with_ellipsis;
