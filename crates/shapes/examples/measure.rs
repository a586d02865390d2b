//! Sample a handful of triangles and print their measurements.
//! Run: `cargo run -p shapes --example measure`

use shapes::prelude::*;

fn main() -> Result<(), ShapeError> {
    let range = SideRange { min: 1.0, max: 10.0 };
    let mut tok = ReplayToken::new(2024, 0);
    for _ in 0..5 {
        let t = draw_triangle(range, tok)?;
        println!(
            "{t}: area={:.4} right_angle={}",
            t.area(),
            t.has_right_angle()
        );
        tok = tok.advance();
    }

    let r = right_triangle(3.0, 4.0)?;
    println!("{r}: area={} right_angle={}", r.area(), r.has_right_angle());

    let c = Circle::new(2.0)?;
    println!("{c}: area={:.4}", c.area());

    match Triangle::new(1.0, 1.0, 2.0) {
        Ok(t) => println!("unexpected: {t}"),
        Err(e) => println!("rejected ({:?}): {e}", e.kind()),
    }
    Ok(())
}
