//! The demo's commands.

use tessera::framework::CommandTable;
use tessera::prelude::*;

pub fn rainbow() -> Command {
    Command::new(|ctx: BotContext, msg: Message, mut args: Args| async move {
        ctx.reply(&msg, &rainbow_text(&args.rest())).await?;
        anyhow::Ok(())
    })
    .with_help_short("Gives a message in a rainbow-y hue.")
    .with_help("Gives a message in a rainbow-y hue.\n\nPerfect to show off some pride")
}

pub fn help() -> Command {
    Command::new(|ctx: BotContext, msg: Message, mut args: Args| async move {
        let name = args.single();
        let text = help_text(&ctx.commands(), name.as_deref());
        ctx.reply(&msg, &text).await?;
        anyhow::Ok(())
    })
    .with_help_short("Return the help string of a command")
    .with_help("Return the help string of a command\n\nOr a list of commands")
}

/// Colours every non-space character of `input` along a hue gradient.
///
/// Each character is preceded by a `{#rgb}` colour tag; the text ends with
/// the `§r` reset marker.
pub fn rainbow_text(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        if *c == ' ' {
            out.push(' ');
        } else {
            let hue = i as f64 / chars.len() as f64;
            out.push_str(&format!("{{{}}}{c}", hue_to_hex(hue)));
        }
    }
    out.push_str("§r");
    out
}

/// Hex colour of `hue` (0..1) at full saturation and half lightness.
///
/// Uses the three-digit form when every channel is a repeated digit.
fn hue_to_hex(hue: f64) -> String {
    const SATURATION: f64 = 1.0;
    const LIGHTNESS: f64 = 0.5;

    let q = if LIGHTNESS < 0.5 {
        LIGHTNESS * (1.0 + SATURATION)
    } else {
        LIGHTNESS + SATURATION - LIGHTNESS * SATURATION
    };
    let p = 2.0 * LIGHTNESS - q;

    let hex: String = [hue + 1.0 / 3.0, hue, hue - 1.0 / 3.0]
        .into_iter()
        .map(|t| {
            let byte = (hsl_channel(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8;
            format!("{byte:02x}")
        })
        .collect();

    let b = hex.as_bytes();
    if b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
        format!("#{}{}{}", &hex[0..1], &hex[2..3], &hex[4..5])
    } else {
        format!("#{hex}")
    }
}

fn hsl_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Help for the command `name`, or a listing of every command.
pub fn help_text(table: &CommandTable, name: Option<&str>) -> String {
    let Some(name) = name else {
        let mut text = String::from("List of all commands:\n");
        for entry in table.commands() {
            text.push_str(&format!(
                "\n{} - {}",
                entry.primary_name(),
                entry.command.help_short()
            ));
        }
        return text;
    };

    let Some(command) = table.lookup(name) else {
        return format!("Unknown command {name}");
    };

    let aliases: Vec<String> = table
        .names_of(&command)
        .into_iter()
        .map(|alias| format!("> {alias}"))
        .collect();
    format!(
        "Help for command {name}\n{}\n\nAliases:\n{}",
        command.help(),
        aliases.join("\n")
    )
}
