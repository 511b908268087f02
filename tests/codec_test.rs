use approx::assert_relative_eq;
use byteorder::{LittleEndian, WriteBytesExt};
use wkbview::{
    DecodeOptions, GeometryType, Rect, RunVisitor, VertexRun, Wkb, WkbError, point_wkb,
};
use wkbview_types::Point;

// Builders for hand-rolled test buffers. The crate itself only encodes
// points, so everything else is assembled here byte by byte.

fn header(buf: &mut Vec<u8>, geom_type: GeometryType, count: u32) {
    buf.write_u8(1).unwrap();
    buf.write_u32::<LittleEndian>(geom_type.tag()).unwrap();
    buf.write_u32::<LittleEndian>(count).unwrap();
}

fn coords(buf: &mut Vec<u8>, points: &[(f64, f64)]) {
    for (x, y) in points {
        buf.write_f64::<LittleEndian>(*x).unwrap();
        buf.write_f64::<LittleEndian>(*y).unwrap();
    }
}

fn line_string(points: &[(f64, f64)]) -> Vec<u8> {
    let mut buf = Vec::new();
    header(&mut buf, GeometryType::LineString, points.len() as u32);
    coords(&mut buf, points);
    buf
}

fn polygon(rings: &[&[(f64, f64)]]) -> Vec<u8> {
    let mut buf = Vec::new();
    header(&mut buf, GeometryType::Polygon, rings.len() as u32);
    for ring in rings {
        buf.write_u32::<LittleEndian>(ring.len() as u32).unwrap();
        coords(&mut buf, ring);
    }
    buf
}

fn multi_line_string(parts: &[&[(f64, f64)]]) -> Vec<u8> {
    let mut buf = Vec::new();
    header(&mut buf, GeometryType::MultiLineString, parts.len() as u32);
    for part in parts {
        buf.extend_from_slice(&line_string(part));
    }
    buf
}

fn multi_polygon(members: &[&[&[(f64, f64)]]]) -> Vec<u8> {
    let mut buf = Vec::new();
    header(&mut buf, GeometryType::MultiPolygon, members.len() as u32);
    for member in members {
        buf.extend_from_slice(&polygon(member));
    }
    buf
}

/// Counts traversal runs and total points.
#[derive(Default)]
struct RunCounter {
    runs: usize,
    points: usize,
}

impl RunVisitor for RunCounter {
    fn run(&mut self, run: &VertexRun<'_>) -> wkbview::Result<()> {
        self.runs += 1;
        self.points += run.len();
        Ok(())
    }
}

#[test]
fn point_round_trip() {
    let buf = point_wkb(&Point::new(12.5, -7.25));
    let wkb = Wkb::new(&buf).expect("valid point buffer");
    assert_eq!(wkb.geometry_type(), Some(GeometryType::Point));
    assert_eq!(wkb.size(), 1);
    let point = wkb.point().expect("point payload");
    assert_eq!(point.x(), 12.5);
    assert_eq!(point.y(), -7.25);
}

#[test]
fn point_bounds_are_degenerate_but_placed() {
    let buf = point_wkb(&Point::new(3.5, -1.0));
    let bounds = Wkb::new(&buf).unwrap().bounds().unwrap();
    assert_eq!(bounds.min, Point::new(3.5, -1.0));
    assert_eq!(bounds.max, Point::new(3.5, -1.0));
    assert_eq!(bounds.width(), 0.0);
    assert_eq!(bounds.height(), 0.0);
    assert!(bounds.empty());
    assert!(!bounds.is_void());
}

#[test]
fn line_string_bounds() {
    let buf = line_string(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
    let wkb = Wkb::new(&buf).unwrap();
    assert_eq!(wkb.size(), 3);
    let bounds = wkb.bounds().unwrap();
    assert_eq!(bounds.min, Point::new(0.0, 0.0));
    assert_eq!(bounds.max, Point::new(4.0, 3.0));
}

#[test]
fn line_string_geojson_exact() {
    let buf = line_string(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
    let json = Wkb::new(&buf).unwrap().to_geo_json().unwrap();
    assert_eq!(
        json,
        "{\"type\":\"LineString\",\"coordinates\":[[0.000000,0.000000],[4.000000,0.000000],[4.000000,3.000000]]}"
    );
}

#[test]
fn polygon_geojson_nests_one_level_deeper() {
    let ring = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)];
    let buf = polygon(&[&ring]);
    let json = Wkb::new(&buf).unwrap().to_geo_json().unwrap();
    assert_eq!(
        json,
        "{\"type\":\"Polygon\",\"coordinates\":[[[0.000000,0.000000],[2.000000,0.000000],[2.000000,2.000000],[0.000000,2.000000],[0.000000,0.000000]]]}"
    );
}

#[test]
fn multi_line_string_geojson_matches_polygon_depth() {
    let buf = multi_line_string(&[&[(0.0, 0.0), (1.0, 1.0)], &[(2.0, 2.0), (3.0, 3.0)]]);
    let json = Wkb::new(&buf).unwrap().to_geo_json().unwrap();
    assert_eq!(
        json,
        "{\"type\":\"MultiLineString\",\"coordinates\":[[[0.000000,0.000000],[1.000000,1.000000]],[[2.000000,2.000000],[3.000000,3.000000]]]}"
    );
}

#[test]
fn multi_polygon_geojson_grouping() {
    let a = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    let b = [(5.0, 5.0), (6.0, 5.0), (5.0, 6.0)];
    let buf = multi_polygon(&[&[&a], &[&b]]);
    let json = Wkb::new(&buf).unwrap().to_geo_json().unwrap();
    assert_eq!(
        json,
        "{\"type\":\"MultiPolygon\",\"coordinates\":[[[[0.000000,0.000000],[1.000000,0.000000],[0.000000,1.000000]]],[[[5.000000,5.000000],[6.000000,5.000000],[5.000000,6.000000]]]]}"
    );
}

#[test]
fn emitted_geojson_is_valid_json() {
    let ring = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 0.0)];
    for buf in [
        point_wkb(&Point::new(1.0, 2.0)),
        line_string(&[(0.0, 0.0), (1.0, 1.0)]),
        polygon(&[&ring]),
        multi_line_string(&[&[(0.0, 0.0), (1.0, 1.0)]]),
        multi_polygon(&[&[&ring]]),
    ] {
        let json = Wkb::new(&buf).unwrap().to_geo_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).expect("well-formed JSON");
        assert!(value.get("type").is_some(), "missing type key in {json}");
        assert!(value.get("coordinates").is_some());
    }
}

#[test]
fn ring_access_is_checked() {
    let outer = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
    let hole = [(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)];
    let buf = polygon(&[&outer, &hole]);
    let wkb = Wkb::new(&buf).unwrap();
    assert_eq!(wkb.size(), 2);

    let second = wkb.ring(1).unwrap();
    assert_eq!(second.len(), 4);
    assert_eq!(second.get(0).unwrap(), Point::new(1.0, 1.0));

    assert!(matches!(
        wkb.ring(2),
        Err(WkbError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn multi_polygon_size_and_bounds_union() {
    let a = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    let b = [(5.0, 5.0), (6.0, 5.0), (5.0, 6.0)];
    let buf = multi_polygon(&[&[&a], &[&b]]);
    let wkb = Wkb::new(&buf).unwrap();
    assert_eq!(wkb.size(), 2);

    let separate = Rect::union(
        &wkb.polygon(0).unwrap().bounds().unwrap(),
        &wkb.polygon(1).unwrap().bounds().unwrap(),
    );
    assert_eq!(wkb.bounds().unwrap(), separate);
    assert_eq!(separate.min, Point::new(0.0, 0.0));
    assert_eq!(separate.max, Point::new(6.0, 6.0));
}

#[test]
fn traversal_invocation_count() {
    // members with 2 and 3 rings: the visitor must fire 5 times
    let ring = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    let buf = multi_polygon(&[&[&ring, &ring], &[&ring, &ring, &ring]]);
    let wkb = Wkb::new(&buf).unwrap();

    let mut counter = RunCounter::default();
    wkb.apply(&mut counter).unwrap();
    assert_eq!(counter.runs, 5);
    assert_eq!(counter.points, 15);
}

#[test]
fn multi_line_string_indexed_access_matches_traversal() {
    let parts: [&[(f64, f64)]; 2] = [&[(0.0, 0.0), (1.0, 1.0)], &[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]];
    let buf = multi_line_string(&parts);
    let wkb = Wkb::new(&buf).unwrap();

    let mut counter = RunCounter::default();
    wkb.apply(&mut counter).unwrap();
    assert_eq!(counter.runs, 2);
    assert_eq!(counter.points, 5);

    let second = wkb.line_string(1).unwrap();
    assert_eq!(second.geometry_type(), Some(GeometryType::LineString));
    assert_eq!(second.size(), 3);
    assert_eq!(second.vertices().unwrap().get(2).unwrap(), Point::new(4.0, 4.0));

    assert!(matches!(
        wkb.line_string(2),
        Err(WkbError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn unsupported_types_yield_empty_results() {
    let mut buf = Vec::new();
    header(&mut buf, GeometryType::MultiPoint, 0);
    let wkb = Wkb::new(&buf).unwrap();

    assert_eq!(wkb.ensure_supported(), Err(WkbError::UnsupportedGeometry(4)));
    assert!(wkb.bounds().unwrap().is_void());
    assert_eq!(wkb.to_geo_json().unwrap(), "{}");

    let mut counter = RunCounter::default();
    wkb.apply(&mut counter).unwrap();
    assert_eq!(counter.runs, 0);
}

#[test]
fn unknown_tag_is_not_a_construction_error() {
    let mut buf = Vec::new();
    buf.write_u8(1).unwrap();
    buf.write_u32::<LittleEndian>(0x2000_0001).unwrap(); // EWKB SRID-flagged point
    buf.write_u32::<LittleEndian>(0).unwrap();
    let wkb = Wkb::new(&buf).unwrap();

    assert_eq!(wkb.geometry_type(), None);
    assert_eq!(wkb.raw_tag(), 0x2000_0001);
    assert!(wkb.ensure_supported().is_err());
    assert!(wkb.bounds().unwrap().is_void());
    assert_eq!(wkb.to_geo_json().unwrap(), "{}");
}

#[test]
fn truncated_nested_member_is_an_error() {
    let a = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    let b = [(5.0, 5.0), (6.0, 5.0), (5.0, 6.0)];
    let mut buf = multi_polygon(&[&[&a], &[&b]]);
    buf.truncate(buf.len() - 20); // cut into the second member

    let wkb = Wkb::new(&buf).unwrap();
    assert!(matches!(wkb.bounds(), Err(WkbError::TruncatedBuffer { .. })));

    // the member's 9-byte header survived the cut, so indexed access
    // still hands out a cursor; its payload reads are what fail
    let second = wkb.polygon(1).unwrap();
    assert!(matches!(
        second.bounds(),
        Err(WkbError::TruncatedBuffer { .. })
    ));

    // the first member is intact and still reachable
    assert!(wkb.polygon(0).unwrap().bounds().is_ok());
}

#[test]
fn fractional_coordinates_decode() {
    let buf = line_string(&[(0.1, 0.2), (2.3, 4.5)]);
    let bounds = Wkb::new(&buf).unwrap().bounds().unwrap();
    assert_relative_eq!(bounds.width(), 2.2, epsilon = 1e-12);
    assert_relative_eq!(bounds.height(), 4.3, epsilon = 1e-12);
}

#[test]
fn byte_order_handling() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut buf = line_string(&[(0.0, 0.0), (1.0, 1.0)]);
    buf[0] = 0;
    assert_eq!(Wkb::new(&buf).err(), Some(WkbError::BigEndianUnsupported));

    let wkb = Wkb::with_options(&buf, DecodeOptions::lenient()).unwrap();
    assert_eq!(wkb.byte_order(), 0);
    // counts and coordinates still decode little-endian
    assert_eq!(wkb.size(), 2);
}

#[test]
fn cursors_are_cheap_copies() {
    let buf = line_string(&[(0.0, 0.0), (4.0, 3.0)]);
    let wkb = Wkb::new(&buf).unwrap();
    let copy = wkb;
    assert_eq!(copy.bounds().unwrap(), wkb.bounds().unwrap());
}
