use super::K160;

#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ ((!b) & d)
}

#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ (b & d) ^ (c & d)
}

/// Round function and constant for round `t`.
#[inline(always)]
fn round_function(t: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match t {
        0..=19 => (ch(b, c, d), K160[0]),
        20..=39 => (parity(b, c, d), K160[1]),
        40..=59 => (maj(b, c, d), K160[2]),
        _ => (parity(b, c, d), K160[3]),
    }
}

/// Extends the sixteen block words into the 80-word message schedule.
pub fn expand(block: &[u32; 16]) -> [u32; 80] {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(block);

    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    w
}

/// Runs the 80 rounds over `w` and adds the result back into `state`.
pub fn all_rounds(state: &mut [u32; 5], w: &[u32; 80]) {
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &wt) in w.iter().enumerate() {
        let (f, k) = round_function(t, b, c, d);

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (slot, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *slot = slot.wrapping_add(v);
    }
}
