use rstest::rstest;

use super::*;

#[test]
fn zero_size_is_rejected() {
	assert_eq!(GridSize::new(0), Err(GridError::InvalidSize(0)));
}

#[test]
fn overflowing_size_is_rejected() {
	assert_eq!(GridSize::new(usize::MAX), Err(GridError::InvalidSize(usize::MAX)));
}

#[test]
fn capacity_is_square_of_side() {
	let size = GridSize::new(17).unwrap();
	assert_eq!(size.capacity(), 289);
}

#[rstest]
#[case(0, 0, 0)]
#[case(0, 2, 2)]
#[case(1, 0, 3)]
#[case(2, 2, 8)]
fn linearizes_row_major(#[case] row: i64, #[case] column: i64, #[case] expected: usize) {
	let size = GridSize::new(3).unwrap();
	assert_eq!(size.cell_at(row, column), Ok(CellIndex(expected)));
}

#[rstest]
#[case(-1, 0)]
#[case(0, -1)]
#[case(3, 0)]
#[case(0, 3)]
#[case(i64::MAX, i64::MIN)]
fn out_of_range_coordinates_fail(#[case] row: i64, #[case] column: i64) {
	let size = GridSize::new(3).unwrap();
	assert_eq!(
		size.coord(row, column),
		Err(GridError::InvalidCoordinate { row, column, size: 3 })
	);
}

#[test]
fn coord_of_inverts_cell() {
	let size = GridSize::new(5).unwrap();
	for cell in 0..size.capacity() {
		let coord = size.coord_of(CellIndex(cell)).unwrap();
		assert_eq!(size.cell(coord), CellIndex(cell));
	}
}

#[test]
fn coord_of_rejects_cells_past_capacity() {
	let size = GridSize::new(2).unwrap();
	assert_eq!(
		size.coord_of(CellIndex(4)),
		Err(GridError::InvalidCell {
			cell: CellIndex(4),
			capacity: 4
		})
	);
}

#[test]
fn size_deserializes_through_validation() {
	let size: GridSize = serde_json::from_str("4").unwrap();
	assert_eq!(size.get(), 4);
	assert!(serde_json::from_str::<GridSize>("0").is_err());
}
