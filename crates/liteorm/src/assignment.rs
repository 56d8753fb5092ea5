//! `SET` clause compilation for `UPDATE`.

use crate::row::Assignment;
use crate::statement::Fragment;

/// Compile `column → value` pairs into `a = ?, b = ?` and the values in the
/// same order.
pub fn compile(assignment: &Assignment) -> Fragment {
    let mut sql = String::new();
    let mut values = Vec::with_capacity(assignment.len());
    for (i, (column, value)) in assignment.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(column);
        sql.push_str(" = ?");
        values.push(value.clone());
    }
    Fragment::new(sql, values)
}
