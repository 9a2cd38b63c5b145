//! Test that a released cursor cannot be pulled from.

use lambars_sorted::sequence::Cursor;

fn main() {
    let mut cursor = Cursor::new(vec![1, 2, 3].into_iter());
    // release takes the cursor by value
    cursor.release();
    let _ = cursor.next();
}
