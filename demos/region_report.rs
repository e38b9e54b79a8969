use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    pantarei::example_apps::run_region_report(std::env::args().skip(1))
}
