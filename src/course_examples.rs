//! Example command scripts with the output they must produce.  Used for testing.

/// (title, input script, expected output)
pub const COURSE_EXAMPLES: [(&str, &str, &str); 11] = [
    (
        "siblings",
        "ADD_MATKUL A\nADD_MATKUL B A\nADD_MATKUL C A\nCETAK_URUTAN\nEXIT\n",
        "A, B, C\n",
    ),
    (
        "edit_replaces",
        "ADD_MATKUL A\nADD_MATKUL B\nADD_MATKUL C A B\nEDIT_MATKUL C B\nCETAK_URUTAN\nEXIT\n",
        "A, B, C\n",
    ),
    (
        "unknown_dependency",
        "ADD_MATKUL X Y\nADD_MATKUL Z\nCETAK_URUTAN\n",
        "Matkul Y tidak ditemukan\nZ\n",
    ),
    (
        "repeat_print",
        "ADD_MATKUL B\nADD_MATKUL A B\nCETAK_URUTAN\nCETAK_URUTAN\n",
        "B, A\nB, A\n",
    ),
    (
        "diamond",
        "ADD_MATKUL DDP
ADD_MATKUL MatDis
ADD_MATKUL SDA DDP MatDis
ADD_MATKUL POK DDP
ADD_MATKUL SisOp SDA POK
CETAK_URUTAN
EXIT
",
        "DDP, MatDis, POK, SDA, SisOp\n",
    ),
    (
        "edit_to_later_course",
        "ADD_MATKUL A\nADD_MATKUL B A\nADD_MATKUL C\nEDIT_MATKUL A C\nCETAK_URUTAN\n",
        "C, A, B\n",
    ),
    (
        "cycle_through_edit",
        "ADD_MATKUL A\nADD_MATKUL B A\nEDIT_MATKUL A B\nCETAK_URUTAN\n",
        "A, B\n",
    ),
    (
        "errors",
        "ADD_MATKUL A
ADD_MATKUL A
EDIT_MATKUL Z A
EDIT_MATKUL A Z
HAPUS A
ADD_MATKUL
CETAK_URUTAN
",
        "Matkul A sudah ada
Matkul Z tidak ditemukan
Matkul Z tidak ditemukan
Perintah tidak ditemukan
Perintah tidak ditemukan
A
",
    ),
    (
        "exit_stops_reading",
        "ADD_MATKUL A\nEXIT\nCETAK_URUTAN\n",
        "",
    ),
    ("empty_print", "CETAK_URUTAN\n", "\n"),
    (
        "byte_order",
        "ADD_MATKUL b\nADD_MATKUL B\nADD_MATKUL a\nCETAK_URUTAN\n",
        "B, a, b\n",
    ),
];

/// Return the input script and expected output of the named example.
pub fn course_example(title: &str) -> Option<(&'static str, &'static str)> {
    COURSE_EXAMPLES
        .iter()
        .find(|(example_title, _, _)| *example_title == title)
        .map(|(_, script, expected)| (*script, *expected))
}
