/// 每个字符占用的像素数。
/// 3 个像素共 9 个通道：8 个通道承载字符的 8 个比特，最后 1 个通道作为标记位。
pub const PIXELS_PER_CHAR: usize = 3;

/// 每个字符编码后的比特数。
/// 码点超过 255 的字符无法用 8 bits 表示，会被拒绝。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素中参与隐写的颜色通道数 (R, G, B)。
/// 若图像带有 Alpha 通道，Alpha 保持不变。
pub const COLOR_CHANNELS: usize = 3;

/// 标记通道在字符槽第 3 个像素中的下标 (蓝色通道)。
pub const MARKER_CHANNEL: usize = 2;

/// 未指定输出路径时，在输入文件名前添加的前缀。
pub const DEFAULT_OUTPUT_PREFIX: &str = "doctored_";
