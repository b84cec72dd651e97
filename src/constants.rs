/// 每个字符在比特流中占用的比特数。
/// 字符按单字节 (码位 0-255) 处理，因此固定为 8 个二进制位，高位在前。
pub const BITS_PER_CHAR: u64 = 8;

/// 可编码字符的最大码位。
/// 超出此值的字符会被拒绝，而不是被截断。
pub const MAX_CODEPOINT: u32 = 0xFF;

/// 每个像素可承载的有效载荷比特数。
/// 容量计算与通道数无关：一个像素对应一个比特。
pub const BITS_PER_PIXEL: u64 = 1;
