// Color mode handling and output sinks.

use std::str::FromStr;

use termfmt::{ColorMode, FormatBuilder, TERMINATOR, utils};

#[test]
fn test_color_mode_from_str() {
    assert_eq!(ColorMode::from_str("on"), Ok(ColorMode::On));
    assert_eq!(ColorMode::from_str("off"), Ok(ColorMode::Off));
    assert_eq!(ColorMode::from_str("auto"), Ok(ColorMode::Auto));
    assert!(ColorMode::from_str("always").is_err());
}

#[test]
fn test_render_with_off_strips_codes() -> Result<(), Box<dyn std::error::Error>> {
    let mut fmt = FormatBuilder::new();
    fmt.red("Hello ")?.bold("World")?;
    assert_eq!(fmt.render_with(ColorMode::Off), "Hello World");
    assert_eq!(fmt.render_with(ColorMode::On), fmt.render());
    Ok(())
}

#[test]
fn test_write_to_honors_color_mode() -> Result<(), Box<dyn std::error::Error>> {
    let mut fmt = FormatBuilder::new();
    fmt.green("ok")?;

    let mut colored = Vec::new();
    fmt.write_to(&mut colored)?;
    assert_eq!(
        String::from_utf8(colored)?,
        format!("\x1b[92mok{TERMINATOR}\n")
    );

    let mut plain = Vec::new();
    fmt.color_mode(ColorMode::Off).write_to(&mut plain)?;
    assert_eq!(String::from_utf8(plain)?, "ok\n");
    Ok(())
}

#[test]
fn test_color_mode_does_not_affect_render() -> Result<(), Box<dyn std::error::Error>> {
    let mut fmt = FormatBuilder::new();
    fmt.color_mode(ColorMode::Off).cyan("x")?;
    assert_eq!(fmt.render(), format!("\x1b[96mx{TERMINATOR}"));
    Ok(())
}

#[test]
fn test_visible_len_of_rendered_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut fmt = FormatBuilder::new();
    fmt.background(termfmt::Color::Magenta, "abc")?.pop("de")?;
    assert_eq!(utils::visible_len(&fmt.render()), 5);
    Ok(())
}
