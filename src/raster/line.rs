// MIT/Apache2 License

//! Line plotting algorithms. Pixel centers sit on integer coordinates.

/// The pixel that a coordinate falls into. Halfway coordinates go to the higher pixel.
#[inline]
pub(crate) fn pixel(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

#[inline]
fn fpart(v: f32) -> f32 {
    v - v.floor()
}

#[inline]
fn rfpart(v: f32) -> f32 {
    1.0 - fpart(v)
}

/// Plot every pixel of a line between two pixels with Bresenham's algorithm, including both ends.
pub(crate) fn bresenham<F: FnMut(i32, i32)>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Plot an anti-aliased line with Xiaolin Wu's algorithm. The plot callback receives the coverage of each
/// pixel, between zero and one.
pub(crate) fn wu<F: FnMut(i32, i32, f32)>(
    mut x0: f32,
    mut y0: f32,
    mut x1: f32,
    mut y1: f32,
    mut plot: F,
) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let mut put = |x: i32, y: i32, c: f32| {
        if steep {
            plot(y, x, c)
        } else {
            plot(x, y, c)
        }
    };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    // first endpoint
    let xend = pixel(x0);
    let yend = y0 + gradient * (xend as f32 - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend;
    let ypxl1 = yend.floor() as i32;
    put(xpxl1, ypxl1, rfpart(yend) * xgap);
    put(xpxl1, ypxl1 + 1, fpart(yend) * xgap);
    let mut intery = yend + gradient;

    // second endpoint
    let xend = pixel(x1);
    let yend = y1 + gradient * (xend as f32 - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend;
    let ypxl2 = yend.floor() as i32;
    if xpxl2 != xpxl1 {
        put(xpxl2, ypxl2, rfpart(yend) * xgap);
        put(xpxl2, ypxl2 + 1, fpart(yend) * xgap);
    }

    for x in (xpxl1 + 1)..xpxl2 {
        let y = intery.floor() as i32;
        put(x, y, rfpart(intery));
        put(x, y + 1, fpart(intery));
        intery += gradient;
    }
}
