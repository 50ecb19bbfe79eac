pub mod allocation_grid;
