//! # 报告输出模块
//!
//! 把 [`EmbedReport`] 打印到终端。被修改过的通道值以绿色高亮显示。
//! 报告只观察嵌入结果，不参与编码过程。

use crate::constants::{COLOR_CHANNELS, MARKER_CHANNEL, PIXELS_PER_CHAR};
use crate::embed::{EmbedReport, SlotReport};
use colored::Colorize;

fn channel_text(before: u8, after: u8) -> String {
    if before == after {
        after.to_string()
    } else {
        after.to_string().green().to_string()
    }
}

fn parity_text(odd: bool) -> &'static str {
    if odd { "odd" } else { "even" }
}

fn pixel_text(pixel: &[u8; COLOR_CHANNELS]) -> String {
    format!("({}, {}, {})", pixel[0], pixel[1], pixel[2])
}

/// 编码前的像素列表，例如 `[(100, 100, 100), (100, 100, 100), (100, 100, 100)]`。
fn bitmap_text(pixels: &[[u8; COLOR_CHANNELS]]) -> String {
    let pixels: Vec<String> = pixels.iter().map(pixel_text).collect();
    format!("[{}]", pixels.join(", "))
}

/// 把一个字符槽格式化为一行，例如 `'H' 01001000  (100, 99, 100) (100, 99, 100) (100, 100, 100)`。
///
/// 调试模式下额外列出每个通道要求的奇偶性。
pub fn format_slot(slot: &SlotReport, debug: bool) -> String {
    let mut line = format!("\t{:?} {} ", slot.character, slot.bits);
    let mut bits = slot.bits.bytes();

    for pixel_index in 0..PIXELS_PER_CHAR {
        let before = slot.before[pixel_index];
        let after = slot.after[pixel_index];
        let channels: Vec<String> = (0..COLOR_CHANNELS)
            .map(|c| channel_text(before[c], after[c]))
            .collect();
        line.push_str(&format!(" ({})", channels.join(", ")));
    }

    if debug {
        let mut required = Vec::with_capacity(PIXELS_PER_CHAR * COLOR_CHANNELS);
        for pixel_index in 0..PIXELS_PER_CHAR {
            for channel in 0..COLOR_CHANNELS {
                let odd = if pixel_index == PIXELS_PER_CHAR - 1 && channel == MARKER_CHANNEL {
                    slot.is_last
                } else {
                    bits.next() == Some(b'1')
                };
                required.push(parity_text(odd));
            }
        }
        line.push_str(&format!("\n\t    needs: {}", required.join(", ")));
    }

    line
}

/// 生成完整的报告文本：图像数据、逐字符二进制表示、待修改像素和逐槽修改结果。
///
/// 调试模式下还会单独列出每个字符槽编码前的 3 个像素。
pub fn format_report(report: &EmbedReport) -> String {
    let debug = report.config.debug;
    let mut out = String::new();

    out.push_str("==> Image data\n");
    out.push_str(&format!("\tImage size: {}\n", report.image_pixels));
    out.push_str(&format!(
        "\tPixels needed for message: {}\n\n",
        report.pixels_needed
    ));

    out.push_str("==> Binary string data\n");
    out.push_str(&format!(
        "\tLetters from message [{}] in binary:\n",
        report.message
    ));
    for slot in &report.slots {
        out.push_str(&format!("\t{}\n", slot.bits));
    }
    out.push('\n');

    let window: Vec<[u8; COLOR_CHANNELS]> = report
        .slots
        .iter()
        .flat_map(|slot| slot.before)
        .collect();
    out.push_str("==> Pixel data\n");
    out.push_str(&format!(
        "\tPixels to be modified:\n{}\n\n",
        bitmap_text(&window)
    ));

    if debug {
        for slot in &report.slots {
            out.push_str(&format!(
                "{} slot {} {:?}: {}\n",
                "[!]".green(),
                slot.index,
                slot.character,
                bitmap_text(&slot.before)
            ));
        }
        out.push('\n');
    }

    out.push_str("==> Bitmap modification\n");
    for slot in &report.slots {
        out.push_str(&format_slot(slot, debug));
        out.push('\n');
    }
    out.push_str(&format!(
        "\n\t{} channel(s) changed across {} pixel(s)",
        report.changed_channels().to_string().green().bold(),
        report.pixels_needed
    ));

    out
}

/// 把 [`format_report`] 的结果打印到标准输出。
pub fn print_report(report: &EmbedReport) {
    println!("{}", format_report(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::EmbedConfig;

    fn slot() -> SlotReport {
        SlotReport {
            index: 0,
            character: 'A',
            bits: "01000001".to_owned(),
            before: [[200, 200, 200]; 3],
            after: [[200, 199, 200], [200, 200, 200], [200, 199, 199]],
            is_last: true,
        }
    }

    fn report(debug: bool) -> EmbedReport {
        EmbedReport {
            message: "A".to_owned(),
            image_pixels: 9,
            pixels_needed: 3,
            slots: vec![slot()],
            config: EmbedConfig { debug },
        }
    }

    #[test]
    fn plain_slot_line_lists_all_pixels() {
        colored::control::set_override(false);
        let line = format_slot(&slot(), false);
        assert!(line.contains("'A' 01000001"));
        assert!(line.contains("(200, 199, 200) (200, 200, 200) (200, 199, 199)"));
        assert!(!line.contains("needs"));
    }

    #[test]
    fn debug_slot_line_lists_required_parity() {
        colored::control::set_override(false);
        let line = format_slot(&slot(), true);
        assert!(line.contains("needs: even, odd, even, even, even, even, even, odd, odd"));
    }

    #[test]
    fn report_lists_pixels_before_modification() {
        colored::control::set_override(false);
        let text = format_report(&report(false));
        assert!(text.contains("==> Image data"));
        assert!(text.contains("Image size: 9"));
        assert!(text.contains("Pixels needed for message: 3"));
        assert!(text.contains("Letters from message [A] in binary:"));
        assert!(text.contains(
            "==> Pixel data\n\tPixels to be modified:\n[(200, 200, 200), (200, 200, 200), (200, 200, 200)]"
        ));
        assert!(text.contains("==> Bitmap modification"));
        assert!(text.contains("3 channel(s) changed across 3 pixel(s)"));
        assert!(!text.contains("[!] slot"));

        let pixel_data = text.find("==> Pixel data").unwrap();
        let modification = text.find("==> Bitmap modification").unwrap();
        assert!(pixel_data < modification);
    }

    #[test]
    fn debug_report_prints_each_slot_bitmap() {
        colored::control::set_override(false);
        let text = format_report(&report(true));
        assert!(text.contains("[!] slot 0 'A': [(200, 200, 200), (200, 200, 200), (200, 200, 200)]"));
        assert!(text.contains("needs:"));
    }
}
