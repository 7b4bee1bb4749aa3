use eyre::{Result, WrapErr, bail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
  Hex,
  Ascii,
  Latin1,
  Utf8,
}

impl Encoding {
  pub const fn label(self) -> &'static str {
    match self {
      Self::Hex => "hex",
      Self::Ascii => "ascii",
      Self::Latin1 => "latin1",
      Self::Utf8 => "utf8",
    }
  }

  /// Turn `input` into the bytes the CRC is computed over.
  pub fn encode(self, input: &str) -> Result<Vec<u8>> {
    match self {
      Self::Hex => hex::decode(input).wrap_err_with(|| format!("invalid hex input `{input}`")),
      Self::Ascii => {
        if let Some((pos, c)) = input.char_indices().find(|(_, c)| !c.is_ascii()) {
          bail!("character {c:?} at byte {pos} is not ASCII");
        }
        Ok(input.as_bytes().to_vec())
      }
      Self::Latin1 => input
        .chars()
        .map(|c| u8::try_from(c).map_err(|_| eyre::eyre!("character {c:?} is outside ISO-8859-1")))
        .collect(),
      Self::Utf8 => Ok(input.as_bytes().to_vec()),
    }
  }
}
