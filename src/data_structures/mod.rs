pub mod work_list;

pub use work_list::PriorityWorkList;
