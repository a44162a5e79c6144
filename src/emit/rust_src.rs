use crate::models::TableEntry;

/// Emit the table as a Rust constant module, mirroring the C header's
/// alias-plus-array shape for firmware written in Rust.
pub fn emit(table: &[TableEntry]) -> String {
    let mut out = String::new();

    for entry in table {
        out.push_str(&format!(
            "pub const BMP_{}: usize = {};\n",
            entry.ident, entry.index
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "pub static BITMAP: [[u8; 8]; {}] = [\n",
        table.len()
    ));
    for entry in table {
        let bytes = entry
            .bitmap
            .iter()
            .map(|b| format!("{b:3}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    [{bytes}], // {} {}\n",
            entry.index, entry.ident
        ));
    }
    out.push_str("];\n");

    out
}
