//! Usage text.

use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};

pub fn print_help() {
    let defaults = Settings::default();
    println!("cyclepass {}", crate::VERSION);
    println!("Password generator rotating through the selected character classes.");
    println!();
    println!("USAGE:");
    println!("  cyclepass [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!(" Password:");
    println!(
        "  -l, --length <N>     Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: {})",
        defaults.pass_length
    );
    println!(
        "  -n, --number <N>     How many to generate (default: {})",
        defaults.number_of_passwords
    );
    println!("      --no-lower       Leave out lowercase letters");
    println!("      --no-upper       Leave out uppercase letters");
    println!("      --no-digits      Leave out digits");
    println!("      --no-symbols     Leave out symbols");
    println!();
    println!(" Entropy:");
    println!("  -u, --urandom        Use the OS generator instead of hardware entropy");
    println!();
    println!(" Output:");
    println!("  -q, --quiet          Suppress status messages");
    println!();
    println!(" Info:");
    println!("  -h, --help           Display this help message");
    println!("  -v, --version        Display version");
    println!();
    println!("EXAMPLES:");
    println!("  cyclepass                  One password, {} characters", defaults.pass_length);
    println!("  cyclepass -l 14 -n 3       Three passwords, 14 characters each");
    println!("  cyclepass --no-symbols     Letters and digits only");
}
