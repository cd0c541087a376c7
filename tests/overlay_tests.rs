use trichroma::{overlay, overlay_cell, Grid, Symbol};

fn sym(ch: char) -> Symbol {
    match ch {
        'N' => Symbol::Empty,
        'R' => Symbol::Red,
        'B' => Symbol::Blue,
        'Y' => Symbol::Yellow,
        'P' => Symbol::Purple,
        'O' => Symbol::Orange,
        'G' => Symbol::Green,
        'K' => Symbol::Black,
        _ => panic!("bad symbol char {ch}"),
    }
}

fn grid(rows: [&str; 3]) -> Grid {
    let mut g = Grid::new();
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 3, "row '{row}' must have 3 symbols");
        for (c, ch) in row.chars().enumerate() {
            g.set_rc(r as u8, c as u8, sym(ch));
        }
    }
    g
}

#[test]
fn mask_bijection_roundtrip() {
    let all = [
        Symbol::Empty,
        Symbol::Red,
        Symbol::Blue,
        Symbol::Yellow,
        Symbol::Purple,
        Symbol::Orange,
        Symbol::Green,
        Symbol::Black,
    ];
    for s in all {
        assert_eq!(Symbol::from_mask(s.mask()), s, "mask roundtrip for {s:?}");
    }
    // Derived masks are unions of their constituents
    assert_eq!(Symbol::Purple.mask(), Symbol::Red.mask() | Symbol::Blue.mask());
    assert_eq!(Symbol::Orange.mask(), Symbol::Red.mask() | Symbol::Yellow.mask());
    assert_eq!(Symbol::Green.mask(), Symbol::Blue.mask() | Symbol::Yellow.mask());
    assert_eq!(
        Symbol::Black.mask(),
        Symbol::Red.mask() | Symbol::Blue.mask() | Symbol::Yellow.mask()
    );
}

#[test]
fn all_empty_is_empty_and_valid() {
    assert_eq!(
        overlay_cell([Symbol::Empty, Symbol::Empty, Symbol::Empty]),
        (Symbol::Empty, true)
    );
}

#[test]
fn same_color_stacks() {
    assert_eq!(
        overlay_cell([Symbol::Blue, Symbol::Blue, Symbol::Empty]),
        (Symbol::Blue, true)
    );
    assert_eq!(
        overlay_cell([Symbol::Red, Symbol::Red, Symbol::Red]),
        (Symbol::Red, true)
    );
    assert_eq!(
        overlay_cell([Symbol::Yellow, Symbol::Empty, Symbol::Empty]),
        (Symbol::Yellow, true)
    );
}

#[test]
fn one_to_one_mixtures_derive() {
    assert_eq!(
        overlay_cell([Symbol::Red, Symbol::Blue, Symbol::Empty]),
        (Symbol::Purple, true)
    );
    assert_eq!(
        overlay_cell([Symbol::Red, Symbol::Yellow, Symbol::Empty]),
        (Symbol::Orange, true)
    );
    assert_eq!(
        overlay_cell([Symbol::Blue, Symbol::Yellow, Symbol::Empty]),
        (Symbol::Green, true)
    );
    assert_eq!(
        overlay_cell([Symbol::Red, Symbol::Blue, Symbol::Yellow]),
        (Symbol::Black, true)
    );
}

#[test]
fn imbalanced_mixture_is_invalid() {
    assert_eq!(
        overlay_cell([Symbol::Blue, Symbol::Blue, Symbol::Yellow]),
        (Symbol::Empty, false)
    );
    assert_eq!(
        overlay_cell([Symbol::Red, Symbol::Red, Symbol::Blue]),
        (Symbol::Empty, false)
    );
}

/// Input order never matters.
#[test]
fn overlay_cell_is_order_independent() {
    let perms = [
        [Symbol::Red, Symbol::Blue, Symbol::Empty],
        [Symbol::Blue, Symbol::Red, Symbol::Empty],
        [Symbol::Empty, Symbol::Red, Symbol::Blue],
    ];
    for p in perms {
        assert_eq!(overlay_cell(p), (Symbol::Purple, true));
    }
}

#[test]
fn full_grid_overlay_flags_any_invalid_cell() {
    // Cell (0,0): B+B+Y clash (invalid). Cell (0,1): R+B mix. Cell (2,2): Y stack.
    let a = grid(["BRN", "NNN", "NNY"]);
    let b = grid(["BBN", "NNN", "NNY"]);
    let c = grid(["YNN", "NNN", "NNN"]);

    let (out, ok) = overlay([a, b, c]);
    assert!(!ok, "clashing cell must poison overall validity");

    // Invalid cell resolves to empty, valid cells are still computed.
    assert_eq!(out.get_rc(0, 0), Symbol::Empty);
    assert_eq!(out.get_rc(0, 1), Symbol::Purple);
    assert_eq!(out.get_rc(2, 2), Symbol::Yellow);
    assert_eq!(out.get_rc(1, 1), Symbol::Empty);
}

#[test]
fn full_grid_overlay_valid_case() {
    let a = grid(["RNN", "NNN", "NNN"]);
    let b = grid(["NBN", "NNN", "NNN"]);
    let c = grid(["NNY", "NNN", "NNN"]);

    let (out, ok) = overlay([a, b, c]);
    assert!(ok);
    assert_eq!(out, grid(["RBY", "NNN", "NNN"]));
}
