use crate::{CodePoint, Decoder, Encoder, Result};

pub(crate) fn decode_all(decoder: &mut dyn Decoder, bytes: &[u8]) -> Result<Vec<u32>> {
    let mut src = bytes;
    let mut out = Vec::new();
    while let Some(cp) = decoder.decode(&mut src)? {
        out.push(cp.value());
    }
    Ok(out)
}

pub(crate) fn decode_str(decoder: &mut dyn Decoder, bytes: &[u8]) -> Result<String> {
    let values = decode_all(decoder, bytes)?;
    Ok(values
        .into_iter()
        .map(|v| char::from_u32(v).expect("decoded value should be a scalar"))
        .collect())
}

pub(crate) fn encode_str(encoder: &mut dyn Encoder, text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for c in text.chars() {
        encoder.encode(&mut out, CodePoint::from(c))?;
    }
    Ok(out)
}
