//! The zero-copy WKB cursor and its traversal protocol.
//!
//! A [`Wkb`] is a non-owning view over one WKB record inside a
//! caller-supplied byte buffer. Construction validates the 9-byte header
//! window and caches the order byte, the type tag and the count field;
//! everything else is decoded lazily, and every payload read is checked
//! against the buffer length so a malformed or truncated buffer yields a
//! [`WkbError::TruncatedBuffer`] instead of reading out of bounds.
//!
//! Record layout after the 1-byte order and 4-byte type tag:
//!
//! | Geometry        | Payload                                                    |
//! |-----------------|------------------------------------------------------------|
//! | Point           | x, y (two 8-byte floats)                                   |
//! | LineString      | point count N, then N 16-byte pairs                        |
//! | Polygon         | ring count R, then R × (point count + pairs)               |
//! | MultiLineString | part count M, then M full nested LineString records        |
//! | MultiPolygon    | part count M, then M full nested Polygon records           |

use crate::bounds::BoundsReducer;
use crate::error::{Result, WkbError};
use crate::geometry::GeometryType;
use crate::options::DecodeOptions;
use crate::visit::RunVisitor;
use byteorder::{ByteOrder, LittleEndian};
use wkbview_types::{Point, Rect};

/// Order byte value declaring little-endian (NDR) encoding.
pub const LITTLE_ENDIAN_ORDER: u8 = 1;

/// Bytes occupied by order byte + type tag + count field.
const HEADER_LEN: usize = 9;
/// Bytes occupied by one (x, y) coordinate pair.
const COORD_LEN: usize = 16;

fn read_u32(buf: &[u8], offset: usize) -> Result<u32> {
    let end = offset.checked_add(4).filter(|end| *end <= buf.len());
    match end {
        Some(end) => Ok(LittleEndian::read_u32(&buf[offset..end])),
        None => Err(WkbError::TruncatedBuffer {
            offset,
            len: 4,
            buffer_len: buf.len(),
        }),
    }
}

fn read_f64(buf: &[u8], offset: usize) -> Result<f64> {
    let end = offset.checked_add(8).filter(|end| *end <= buf.len());
    match end {
        Some(end) => Ok(LittleEndian::read_f64(&buf[offset..end])),
        None => Err(WkbError::TruncatedBuffer {
            offset,
            len: 8,
            buffer_len: buf.len(),
        }),
    }
}

/// A borrowed view over `len` consecutive 16-byte coordinate pairs.
///
/// This is the unit of traversal: one full LineString, one polygon
/// ring, or the single synthetic run of a Point. The underlying bytes
/// were range-checked when the run was carved out of the buffer, so
/// point access only fails on a bad index.
#[derive(Debug, Clone, Copy)]
pub struct VertexRun<'a> {
    buf: &'a [u8],
    len: usize,
}

impl<'a> VertexRun<'a> {
    /// Carve `len` coordinate pairs out of `buf` starting at `offset`,
    /// verifying the whole range up front.
    fn slice(buf: &'a [u8], offset: usize, len: usize) -> Result<Self> {
        let end = len
            .checked_mul(COORD_LEN)
            .and_then(|bytes| offset.checked_add(bytes))
            .filter(|end| *end <= buf.len())
            .ok_or(WkbError::TruncatedBuffer {
                offset,
                len: len.saturating_mul(COORD_LEN),
                buffer_len: buf.len(),
            })?;
        Ok(Self {
            buf: &buf[offset..end],
            len,
        })
    }

    /// Number of points in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the run holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode the point at `index`.
    pub fn get(&self, index: usize) -> Result<Point> {
        if index >= self.len {
            return Err(WkbError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let at = index * COORD_LEN;
        Ok(Point::new(
            LittleEndian::read_f64(&self.buf[at..at + 8]),
            LittleEndian::read_f64(&self.buf[at + 8..at + 16]),
        ))
    }

    /// Decode the first point, if any.
    pub fn first(&self) -> Option<Point> {
        self.get(0).ok()
    }

    /// Iterate over the points of the run, decoding on the fly.
    pub fn points(&self) -> impl Iterator<Item = Point> + 'a {
        let buf = self.buf;
        buf.chunks_exact(COORD_LEN).map(|pair| {
            Point::new(
                LittleEndian::read_f64(&pair[..8]),
                LittleEndian::read_f64(&pair[8..]),
            )
        })
    }

    /// Bounding rectangle of the run, folded from the void rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::bounds_of(self.points())
    }
}

/// A read-only cursor over one WKB record.
///
/// Cursors are cheap and `Copy`; they hold a reference into the
/// caller's buffer plus the cached header fields, and may not outlive
/// the buffer. Any number of cursors may read the same buffer, from any
/// number of threads, as long as nothing mutates it.
///
/// # Examples
///
/// ```
/// use wkbview::{Wkb, point_wkb};
/// use wkbview_types::Point;
///
/// let buf = point_wkb(&Point::new(12.5, -7.25));
/// let wkb = Wkb::new(&buf)?;
/// assert_eq!(wkb.point()?, Point::new(12.5, -7.25));
/// # Ok::<(), wkbview::WkbError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Wkb<'a> {
    buf: &'a [u8],
    opts: DecodeOptions,
    order: u8,
    tag: u32,
    count: u32,
}

impl<'a> Wkb<'a> {
    /// Bind a cursor to `buf` with the default (strict little-endian)
    /// options.
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        Self::with_options(buf, DecodeOptions::default())
    }

    /// Bind a cursor to `buf`.
    ///
    /// Requires at least the 9-byte header window. The count field at
    /// offset 5 is read eagerly; its meaning is type-dependent (vertex,
    /// ring or part count) and it is garbage for a Point, where
    /// [`size`](Wkb::size) ignores it.
    pub fn with_options(buf: &'a [u8], opts: DecodeOptions) -> Result<Self> {
        if buf.len() < HEADER_LEN {
            return Err(WkbError::TruncatedBuffer {
                offset: 0,
                len: HEADER_LEN,
                buffer_len: buf.len(),
            });
        }
        let order = buf[0];
        if order != LITTLE_ENDIAN_ORDER {
            if opts.require_little_endian {
                return Err(WkbError::BigEndianUnsupported);
            }
            log::warn!("order byte {order} is not little-endian; decoding as little-endian anyway");
        }
        let tag = read_u32(buf, 1)?;
        let count = read_u32(buf, 5)?;
        Ok(Self {
            buf,
            opts,
            order,
            tag,
            count,
        })
    }

    /// The leading order byte, exposed as read.
    #[inline]
    pub fn byte_order(&self) -> u8 {
        self.order
    }

    /// The raw 4-byte type tag, including values outside the base 2D
    /// range.
    #[inline]
    pub fn raw_tag(&self) -> u32 {
        self.tag
    }

    /// The decoded geometry type, or `None` for an unrecognized tag.
    #[inline]
    pub fn geometry_type(&self) -> Option<GeometryType> {
        GeometryType::from_tag(self.tag)
    }

    /// Number of vertices, rings or parts, depending on the type.
    /// Always 1 for a Point.
    pub fn size(&self) -> u32 {
        if self.geometry_type() == Some(GeometryType::Point) {
            1
        } else {
            self.count
        }
    }

    /// Fail fast on the types traversal does not handle.
    ///
    /// `MultiPoint`, `GeometryCollection` and unrecognized tags all
    /// produce empty results from [`apply`](Wkb::apply),
    /// [`bounds`](Wkb::bounds) and [`to_geo_json`](Wkb::to_geo_json);
    /// callers that would rather treat that as an error can check here
    /// first.
    pub fn ensure_supported(&self) -> Result<()> {
        match self.geometry_type() {
            Some(geom_type) if geom_type.is_supported() => Ok(()),
            _ => Err(WkbError::UnsupportedGeometry(self.tag)),
        }
    }

    /// The coordinate pair of a Point record.
    ///
    /// Only meaningful when [`geometry_type`](Wkb::geometry_type) is
    /// `Point`; for other types the payload bytes decode to nonsense.
    pub fn point(&self) -> Result<Point> {
        debug_assert_eq!(self.geometry_type(), Some(GeometryType::Point));
        Ok(Point::new(
            read_f64(self.buf, 5)?,
            read_f64(self.buf, 13)?,
        ))
    }

    /// The vertex run of a LineString record.
    pub fn vertices(&self) -> Result<VertexRun<'a>> {
        debug_assert_eq!(self.geometry_type(), Some(GeometryType::LineString));
        VertexRun::slice(self.buf, HEADER_LEN, self.count as usize)
    }

    /// The `index`-th ring of a Polygon record.
    ///
    /// Walks forward from the start of the payload, skipping whole
    /// prior rings by their length prefixes: O(index), not indexed
    /// access. Visiting every ring is better done through
    /// [`apply`](Wkb::apply), which is O(n) over the whole geometry.
    pub fn ring(&self, index: usize) -> Result<VertexRun<'a>> {
        debug_assert_eq!(self.geometry_type(), Some(GeometryType::Polygon));
        self.check_index(index)?;
        let mut pos = HEADER_LEN;
        for _ in 0..index {
            pos = self.skip_ring(pos)?;
        }
        let count = read_u32(self.buf, pos)? as usize;
        VertexRun::slice(self.buf, pos + 4, count)
    }

    /// The `index`-th member of a MultiPolygon as a nested cursor.
    /// O(index) forward scan, like [`ring`](Wkb::ring).
    pub fn polygon(&self, index: usize) -> Result<Wkb<'a>> {
        debug_assert_eq!(self.geometry_type(), Some(GeometryType::MultiPolygon));
        self.check_index(index)?;
        let mut pos = HEADER_LEN;
        for _ in 0..index {
            pos = self.skip_polygon(pos)?;
        }
        Wkb::with_options(&self.buf[pos..], self.opts)
    }

    /// The `index`-th member of a MultiLineString as a nested cursor.
    /// O(index) forward scan, like [`ring`](Wkb::ring).
    pub fn line_string(&self, index: usize) -> Result<Wkb<'a>> {
        debug_assert_eq!(self.geometry_type(), Some(GeometryType::MultiLineString));
        self.check_index(index)?;
        let mut pos = HEADER_LEN;
        for _ in 0..index {
            pos = self.skip_line_string(pos)?;
        }
        Wkb::with_options(&self.buf[pos..], self.opts)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.count as usize;
        if index >= len {
            return Err(WkbError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Offset just past the ring (count + pairs) starting at `offset`.
    fn skip_ring(&self, offset: usize) -> Result<usize> {
        let count = read_u32(self.buf, offset)? as usize;
        count
            .checked_mul(COORD_LEN)
            .and_then(|bytes| offset.checked_add(4)?.checked_add(bytes))
            .filter(|end| *end <= self.buf.len())
            .ok_or(WkbError::TruncatedBuffer {
                offset,
                len: 4 + count.saturating_mul(COORD_LEN),
                buffer_len: self.buf.len(),
            })
    }

    /// Offset just past the nested Polygon record starting at `offset`.
    fn skip_polygon(&self, offset: usize) -> Result<usize> {
        let rings = read_u32(self.buf, offset + 5)? as usize;
        let mut pos = offset + HEADER_LEN;
        for _ in 0..rings {
            pos = self.skip_ring(pos)?;
        }
        Ok(pos)
    }

    /// Offset just past the nested LineString record starting at
    /// `offset`.
    fn skip_line_string(&self, offset: usize) -> Result<usize> {
        let count = read_u32(self.buf, offset + 5)? as usize;
        count
            .checked_mul(COORD_LEN)
            .and_then(|bytes| offset.checked_add(HEADER_LEN)?.checked_add(bytes))
            .filter(|end| *end <= self.buf.len())
            .ok_or(WkbError::TruncatedBuffer {
                offset,
                len: HEADER_LEN + count.saturating_mul(COORD_LEN),
                buffer_len: self.buf.len(),
            })
    }

    /// Walk the geometry and hand each logical vertex run to `visitor`.
    ///
    /// Invocation counts by type: 1 for Point (a synthetic one-point
    /// run), 1 for LineString, one per ring for Polygon, one per part
    /// for MultiLineString, one per ring across all members for
    /// MultiPolygon. `MultiPoint`, `GeometryCollection` and
    /// unrecognized tags invoke the visitor zero times; use
    /// [`ensure_supported`](Wkb::ensure_supported) to surface that gap
    /// as an error instead.
    pub fn apply<V: RunVisitor>(&self, visitor: &mut V) -> Result<()> {
        match self.geometry_type() {
            Some(GeometryType::Point) => {
                let run = VertexRun::slice(self.buf, 5, 1)?;
                visitor.run(&run)
            }
            Some(GeometryType::LineString) => {
                let run = VertexRun::slice(self.buf, HEADER_LEN, self.count as usize)?;
                visitor.run(&run)
            }
            Some(GeometryType::Polygon) => {
                let mut pos = HEADER_LEN;
                for _ in 0..self.count {
                    pos = self.visit_ring(pos, visitor)?;
                }
                Ok(())
            }
            Some(GeometryType::MultiLineString) => {
                let mut pos = HEADER_LEN;
                for _ in 0..self.count {
                    let count = read_u32(self.buf, pos + 5)? as usize;
                    let run = VertexRun::slice(self.buf, pos + HEADER_LEN, count)?;
                    visitor.run(&run)?;
                    pos += HEADER_LEN + count * COORD_LEN;
                }
                Ok(())
            }
            Some(GeometryType::MultiPolygon) => {
                let mut pos = HEADER_LEN;
                for _ in 0..self.count {
                    let rings = read_u32(self.buf, pos + 5)? as usize;
                    pos += HEADER_LEN;
                    for _ in 0..rings {
                        pos = self.visit_ring(pos, visitor)?;
                    }
                }
                Ok(())
            }
            // Deliberate gap: these types carry no traversal and the
            // visitor is never invoked.
            Some(GeometryType::MultiPoint) | Some(GeometryType::GeometryCollection) | None => {
                log::trace!("no traversal for geometry tag {}; visitor not invoked", self.tag);
                Ok(())
            }
        }
    }

    /// Visit the ring starting at `offset` and return the offset just
    /// past it.
    fn visit_ring<V: RunVisitor>(&self, offset: usize, visitor: &mut V) -> Result<usize> {
        let count = read_u32(self.buf, offset)? as usize;
        let run = VertexRun::slice(self.buf, offset + 4, count)?;
        visitor.run(&run)?;
        Ok(offset + 4 + count * COORD_LEN)
    }

    /// Bounding rectangle of the whole geometry.
    ///
    /// Returns the void rectangle for geometry types traversal does not
    /// handle.
    pub fn bounds(&self) -> Result<Rect> {
        let mut reducer = BoundsReducer::new();
        self.apply(&mut reducer)?;
        Ok(reducer.finish())
    }

    /// Render the geometry as an RFC 7946 GeoJSON geometry object.
    pub fn to_geo_json(&self) -> Result<String> {
        crate::geojson::to_geo_json(self)
    }
}
