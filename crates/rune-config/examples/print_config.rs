/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Word Configuration ===\n");

    println!("Text Settings:");
    println!("  Font: {:?}", config.text.font);
    println!("  Text Size: {:?}", config.text.text_size);
    println!();

    println!("Word Settings:");
    println!("  Line Height: {}", config.word.line_height);
    println!("  Line Spacing: {}", config.word.line_spacing);
    println!("  Selection Offset: {}", config.word.selection_offset);
    println!("  Anchor: {:?}", config.word.anchor);
    println!("  Scale: {}", config.word.scale);
    println!("  Bitmap Ratio: {}", config.word.bitmap_ratio);
    println!("  Selection Color: {:?}", config.word.selection_color);
    println!("  Highlight Color: {:?}", config.word.highlight_color);
    println!("  Highlighted Text Color: {:?}", config.word.highlighted_text_color);
    println!("  Link Color: {:?}", config.word.link_color);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
