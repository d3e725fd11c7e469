//! rClinic main entrypoint.

use rclinic::run;
use rclinic::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        if let Some(hint) = e.hint() {
            eprintln!("   {}", hint);
        }
        std::process::exit(1);
    }
}
