use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    pantarei::example_apps::run_compare_reports(std::env::args().skip(1))
}
