use crate::models::TableEntry;

/// Emit the table in the firmware's `matrix.h` layout: one alias per word
/// binding its identifier to a slot in the `bitmap` array, then the array
/// itself with index and identifier echoed in a trailing comment.
pub fn emit(table: &[TableEntry]) -> String {
    let mut out = String::new();

    for entry in table {
        out.push_str(&format!(
            "#define BMP_{:<10} (bitmap[{}])\n",
            entry.ident, entry.index
        ));
    }

    out.push('\n');
    out.push_str("const unsigned char bitmap[][8] = {\n");
    for entry in table {
        let bytes = entry
            .bitmap
            .iter()
            .map(|b| format!("{b:3}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    {{ {bytes} }},        //  {}  -- {}\n",
            entry.index, entry.ident
        ));
    }
    out.push_str("};\n");

    out
}
