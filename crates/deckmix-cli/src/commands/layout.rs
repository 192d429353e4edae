use deckmix_core::mixing::calculate_grid_layout;

pub fn show(count: usize) {
    let layout = calculate_grid_layout(count);
    println!("{} cards -> {} rows x {} cols", count, layout.rows, layout.cols);
}
