//! Terminal output styling for the tfgen CLI
//!
//! Status messages only: generated HCL is written unstyled to stdout or a
//! file, so these helpers never touch the generation output path.

use owo_colors::OwoColorize;

/// Print a success message with additional details in dim text
pub fn success_with_details(message: &str, details: &str) {
    // Pastel mint green: RGB(152, 225, 152)
    // Brighter grey: RGB(160, 160, 160)
    println!(
        "{} {} {}",
        "✓".truecolor(152, 225, 152).bold(),
        message.bright_white(),
        details.truecolor(160, 160, 160)
    );
}

/// Print a section header with a separator line
pub fn section(title: &str) {
    // Pastel lavender: RGB(181, 174, 254)
    println!("\n{}", title.truecolor(181, 174, 254).bold());
    // Brighter grey: RGB(160, 160, 160)
    println!("{}", "─".repeat(50).truecolor(160, 160, 160));
}

/// Print a key-value pair with styled key and value
pub fn key_value(key: &str, value: &str) {
    // Brighter grey: RGB(160, 160, 160)
    println!(
        "  {} {}",
        format!("{}:", key).truecolor(160, 160, 160),
        value.bright_white()
    );
}

/// Print a dimmed/muted message
pub fn dimmed(message: &str) {
    // Brighter grey: RGB(160, 160, 160)
    println!("{}", message.truecolor(160, 160, 160));
}

/// Print a blank line for spacing
pub fn blank() {
    println!();
}
