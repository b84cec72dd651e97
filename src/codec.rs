//! # 比特编解码模块
//!
//! 将单字节文本 (码位 0-255) 转换为由 '0' 和 '1' 组成的比特流，并将其还原。
//! 每个字符固定占 8 位，高位在前，没有分隔符和长度前缀。

use crate::constants::{BITS_PER_CHAR, MAX_CODEPOINT};
use crate::error::{BitstreamDefect, StegoError};
use std::fmt;
use std::str::FromStr;

const GROUP: usize = BITS_PER_CHAR as usize;

/// 经过校验的单字节文本，每个元素是一个字符的码位。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.len()
    }

    /// 按输入顺序拼接每个字符的 8 位二进制表示。
    pub fn to_bits(&self) -> Bitstream {
        let mut bits = String::with_capacity(self.0.len() * GROUP);
        for byte in &self.0 {
            bits.push_str(&format!("{byte:08b}"));
        }
        Bitstream(bits)
    }

    /// 每个码位直接映射到同值的字符 (U+0000 - U+00FF)。
    pub fn to_text(&self) -> String {
        self.0.iter().map(|&byte| char::from(byte)).collect()
    }
}

impl TryFrom<&str> for Payload {
    type Error = StegoError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.chars()
            .enumerate()
            .map(|(index, character)| {
                let codepoint = u32::from(character);
                if codepoint > MAX_CODEPOINT {
                    return Err(StegoError::Encoding { character, index });
                }
                Ok(codepoint as u8)
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Payload)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload(bytes.to_vec())
    }
}

/// 只含 '0' 和 '1'、长度为 8 的倍数的比特流。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitstream(String);

impl Bitstream {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按顺序逐位迭代，`true` 表示 1。
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|symbol| symbol == b'1')
    }

    /// 每 8 位一组还原为码位。
    pub fn to_payload(&self) -> Payload {
        let bytes = self
            .0
            .as_bytes()
            .chunks_exact(GROUP)
            .map(|group| {
                group
                    .iter()
                    .fold(0u8, |acc, &symbol| (acc << 1) | u8::from(symbol == b'1'))
            })
            .collect();
        Payload(bytes)
    }
}

impl FromStr for Bitstream {
    type Err = StegoError;

    /// 校验符号和长度；任何一项不满足都直接失败，不会截断。
    fn from_str(bits: &str) -> Result<Self, Self::Err> {
        if let Some((index, symbol)) = bits
            .chars()
            .enumerate()
            .find(|&(_, symbol)| symbol != '0' && symbol != '1')
        {
            return Err(BitstreamDefect::InvalidSymbol { symbol, index }.into());
        }

        let len = bits.len();
        let trailing = len % GROUP;
        if trailing != 0 {
            return Err(BitstreamDefect::PartialGroup { len, trailing }.into());
        }

        Ok(Bitstream(bits.to_owned()))
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Bitstream {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 将文本编码为比特流。
///
/// # Errors
///
/// 任一字符码位大于 255 时返回 [`StegoError::Encoding`]，不会产生部分输出。
pub fn encode(text: &str) -> Result<Bitstream, StegoError> {
    Payload::try_from(text).map(|payload| payload.to_bits())
}

/// 将比特流解码为文本。
///
/// # Errors
///
/// 长度不是 8 的倍数或含有非二进制符号时返回 [`StegoError::MalformedBitstream`]。
pub fn decode(bits: &str) -> Result<String, StegoError> {
    let stream: Bitstream = bits.parse()?;
    Ok(stream.to_payload().to_text())
}
