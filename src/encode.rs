//! The single construction path: encoding one point as WKB.

use crate::cursor::LITTLE_ENDIAN_ORDER;
use crate::geometry::GeometryType;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;
use wkbview_types::Point;

/// Byte length of an encoded WKB point record.
pub const POINT_WKB_LEN: usize = 21;

/// Write `point` as a 21-byte little-endian WKB Point record: order
/// byte, type tag, x, y.
pub fn write_point_wkb<W: Write>(mut writer: W, point: &Point) -> std::io::Result<()> {
    writer.write_u8(LITTLE_ENDIAN_ORDER)?;
    writer.write_u32::<LittleEndian>(GeometryType::Point.tag())?;
    writer.write_f64::<LittleEndian>(point.x())?;
    writer.write_f64::<LittleEndian>(point.y())?;
    Ok(())
}

/// Encode `point` into a fresh 21-byte buffer.
///
/// The structural inverse of [`Wkb::point`](crate::Wkb::point); the two
/// round-trip exactly.
///
/// # Examples
///
/// ```
/// use wkbview::{Wkb, point_wkb};
/// use wkbview_types::Point;
///
/// let buf = point_wkb(&Point::new(12.5, -7.25));
/// assert_eq!(buf.len(), 21);
/// assert_eq!(Wkb::new(&buf)?.point()?, Point::new(12.5, -7.25));
/// # Ok::<(), wkbview::WkbError>(())
/// ```
pub fn point_wkb(point: &Point) -> Vec<u8> {
    let mut buf = Vec::with_capacity(POINT_WKB_LEN);
    write_point_wkb(&mut buf, point).expect("writing to a Vec cannot fail");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_layout() {
        let buf = point_wkb(&Point::new(12.5, -7.25));
        assert_eq!(buf.len(), POINT_WKB_LEN);
        assert_eq!(buf[0], 1);
        assert_eq!(&buf[1..5], &1u32.to_le_bytes());
        assert_eq!(&buf[5..13], &12.5f64.to_le_bytes());
        assert_eq!(&buf[13..21], &(-7.25f64).to_le_bytes());
    }

    #[test]
    fn writer_and_vec_agree() {
        let point = Point::new(-180.0, 90.0);
        let mut via_writer = Vec::new();
        write_point_wkb(&mut via_writer, &point).unwrap();
        assert_eq!(via_writer, point_wkb(&point));
    }
}
