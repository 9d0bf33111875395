use std::io::{self, ErrorKind};

use image::RgbImage;

use crate::channel::{pack, unpack};
use crate::constants::{BITS_PER_PIXEL, LENGTH_PREFIX_BYTES};
use crate::planner::{Coordinates, FrameBits, PackBytes};

pub fn capacity(width: u32, height: u32) -> i64 {
    (BITS_PER_PIXEL as i64 * i64::from(width) * i64::from(height)) / 8
        - LENGTH_PREFIX_BYTES as i64
}

pub fn encode(origin: &RgbImage, payload: &[u8]) -> Result<RgbImage, io::Error> {
    let max = capacity(origin.width(), origin.height());
    if payload.len() as i64 > max {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!(
                "The payload of {} bytes exceeds the origin image capacity of {} bytes.",
                payload.len(),
                max
            ),
        ));
    }

    let mut frame = Vec::with_capacity(LENGTH_PREFIX_BYTES + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);

    let mut modified = origin.clone();
    let coordinates = Coordinates::new(origin.width(), origin.height());

    for (bit, (channel, x, y)) in FrameBits::new(&frame).zip(coordinates) {
        if bit {
            let rgb = pack(modified.get_pixel(x, y));
            modified.put_pixel(x, y, unpack(channel.encode_bit(rgb)));
        }
    }

    Ok(modified)
}

pub fn decode(origin: &RgbImage, modified: &RgbImage) -> Result<Vec<u8>, io::Error> {
    if origin.dimensions() != modified.dimensions() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!(
                "Image dimensions do not match: origin is {}x{}, modified is {}x{}.",
                origin.width(),
                origin.height(),
                modified.width(),
                modified.height()
            ),
        ));
    }

    let (width, height) = origin.dimensions();
    let bits = Coordinates::new(width, height).map(|(channel, x, y)| {
        channel.decode_bit(pack(origin.get_pixel(x, y)), pack(modified.get_pixel(x, y)))
    });
    let mut bytes = PackBytes::new(bits);

    let mut prefix = [0u8; LENGTH_PREFIX_BYTES];
    for byte in &mut prefix {
        *byte = bytes.next().ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidData,
                "The image is too small to carry a length prefix.",
            )
        })?;
    }
    let length = u64::from(u32::from_be_bytes(prefix));

    let available = (BITS_PER_PIXEL * u64::from(width) * u64::from(height) / 8)
        .saturating_sub(LENGTH_PREFIX_BYTES as u64);
    if length > available {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!(
                "The recovered length prefix of {length} bytes exceeds the {available} bytes \
                 the image can hold. The modified image appears corrupted or truncated."
            ),
        ));
    }

    Ok(bytes.take(length as usize).collect())
}
