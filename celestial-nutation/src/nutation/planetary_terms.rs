//! IAU 2000A planetary nutation series (MHB2000).
//!
//! 687 terms. Multipliers of `[l, l', F, D, Ω, Me, Ve, Ea, Ma, Ju, Sa, Ur, Ne, pA]`;
//! coefficients in units of 0.1 microarcsecond, ordered `[ψ sin, ψ cos, ε sin, ε cos]`.

use super::series::PlanetaryTerm;

#[rustfmt::skip]
pub static PLANETARY_TERMS: [PlanetaryTerm; 687] = [
    // 1-10
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 8, -16, 4, 5, 0, 0, 0], [1440.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -8, 16, -4, -5, 0, 0, 2], [56.0, -117.0, -42.0, -40.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 8, -16, 4, 5, 0, 0, 2], [125.0, -43.0, 0.0, -54.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 2, 2], [0.0, 5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -4, 8, -1, -5, 0, 0, 2], [3.0, -7.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -8, 3, 0, 0, 0, 1], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, 3, -8, 3, 0, 0, 0, 0], [-114.0, 0.0, 0.0, 61.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 10, -3, 0, 0, 0, 0, 0, 0], [-219.0, 89.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 6, -3, 0, 2], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -8, 3, 0, 0, 0, 0], [-462.0, 1604.0, 0.0, 0.0]),
    // 11-20
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -5, 8, -3, 0, 0, 0, 0], [99.0, 0.0, 0.0, -53.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -4, 8, -3, 0, 0, 0, 1], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -8, 1, 5, 0, 0, 2], [0.0, 6.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 6, 4, 0, 0, 0, 0, 2], [3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -5, 0, 0, 2], [-12.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -5, 0, 0, 1], [14.0, -218.0, 117.0, 8.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 2, -5, 0, 0, 0], [31.0, -481.0, -257.0, -17.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -5, 0, 0, 0], [-491.0, 128.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, -2, 5, 0, 0, 0], [-3084.0, 5123.0, 2735.0, 1647.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 5, 0, 0, 1], [-1444.0, 2409.0, -1286.0, -771.0]),
    // 21-30
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 5, 0, 0, 2], [11.0, -24.0, -11.0, -9.0]),
    PlanetaryTerm::new([2, 0, -1, -1, 0, 0, 0, 3, -7, 0, 0, 0, 0, 0], [26.0, -9.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 19, -21, 3, 0, 0, 0, 0, 0], [103.0, -60.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 2, -4, 0, -3, 0, 0, 0, 0], [0.0, -13.0, -7.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -1, 1, 0, 0, -1, 0, 2, 0, 0, 0, 0], [-26.0, -29.0, -16.0, 14.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, -4, 10, 0, 0, 0], [9.0, -27.0, -14.0, -5.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 2, 0, 0, -5, 0, 0, 0], [12.0, 0.0, 0.0, -6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -7, 4, 0, 0, 0, 0, 0], [-7.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 1, -1, 0, 0, 0], [0.0, 24.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 2, 0, -2, 0, 0, 0, 0], [284.0, 0.0, 0.0, -151.0]),
    // 31-40
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 18, -16, 0, 0, 0, 0, 0, 0], [226.0, 101.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 1, 1, 2, 0, 0, 1, 0, -2, 0, 0, 0, 0], [0.0, -8.0, -2.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 1, -1, 1, 0, 18, -17, 0, 0, 0, 0, 0, 0], [0.0, -6.0, -3.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 1, 1, 0, 0, 2, -2, 0, 0, 0, 0, 0], [5.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 13, 0, 0, 0, 0, 0, 2], [-41.0, 175.0, 76.0, 17.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 2, 0, -8, 11, 0, 0, 0, 0, 0, 0], [0.0, 15.0, 6.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 13, 0, 0, 0, 0, 0, 1], [425.0, 212.0, -133.0, 269.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -8, 12, 0, 0, 0, 0, 0, 0], [1200.0, 598.0, 319.0, -641.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 8, -13, 0, 0, 0, 0, 0, 0], [235.0, 334.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 8, -14, 0, 0, 0, 0, 0, 0], [11.0, -12.0, -7.0, -6.0]),
    // 41-50
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 8, -13, 0, 0, 0, 0, 0, 1], [5.0, -6.0, 3.0, 3.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 2, 0, -4, 5, 0, 0, 0], [-5.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 2, 0, 3, -3, 0, 0, 0, 0, 0, 0], [6.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -3, 1, 0, 0, 0], [15.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 3, -5, 0, 2, 0, 0, 0, 0], [13.0, 0.0, 0.0, -7.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -4, 3, 0, 0, 0], [-6.0, -9.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0], [266.0, -78.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -1, 2, 0, 0, 0, 0, 0], [-460.0, -435.0, -232.0, 246.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -2, 2, 0, 0, 0, 0, 0], [0.0, 15.0, 7.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 1, 0, 1, 0, 3, -5, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 2.0]),
    // 51-60
    PlanetaryTerm::new([-1, 0, 0, 1, 0, 0, 3, -4, 0, 0, 0, 0, 0, 0], [0.0, 131.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -2, -2, 0, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 2, 0, 2, 0, 0, -5, 9, 0, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 0, -1, 0, 0], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 0, 0, 2, 0], [-17.0, -19.0, -10.0, 9.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1], [-9.0, -11.0, 6.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2], [-6.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([-1, 0, 0, 1, 0, 0, 0, 3, -4, 0, 0, 0, 0, 0], [-16.0, 8.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    // 61-70
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, 0, 2, 0, 0, 0], [11.0, 24.0, 11.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -9, 17, 0, 0, 0, 0, 0], [-3.0, -4.0, -2.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 2, 0, -3, 5, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, -1, 2, 0, 0, 0], [0.0, -8.0, -4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 17, -16, 0, -2, 0, 0, 0, 0], [0.0, 5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 1, -3, 0, 0, 0], [0.0, 3.0, 2.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 5, -6, 0, 0, 0, 0, 0], [-6.0, 4.0, 2.0, 3.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 0, 0, 0, 9, -13, 0, 0, 0, 0, 0], [-3.0, -5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, 0, 1, 0, 0, 0], [-5.0, 0.0, 0.0, 2.0]),
    // 71-80
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0], [4.0, 24.0, 13.0, -2.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0], [-42.0, 20.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 0, 0, 5, -6, 0, 0, 0, 0, 0, 0], [-10.0, 233.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 1, 0, 5, -7, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 6, -8, 0, 0, 0, 0, 0, 0], [78.0, -18.0, 0.0, 0.0]),
    PlanetaryTerm::new([2, 0, 1, -3, 1, 0, -6, 7, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0], [0.0, -4.0, -2.0, 1.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 0, 2, 0, 0], [0.0, -8.0, -4.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1], [0.0, -5.0, 3.0, 0.0]),
    // 81-90
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2], [-7.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -8, 15, 0, 0, 0, 0, 2], [-14.0, 8.0, 3.0, 6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -8, 15, 0, 0, 0, 0, 1], [0.0, 8.0, -4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -9, 15, 0, 0, 0, 0, 0], [0.0, 19.0, 10.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 8, -15, 0, 0, 0, 0, 0], [45.0, -22.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, -1, -1, 0, 0, 0, 8, -15, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 0, 0, 2, -5, 0, 0, 0, 0, 0, 0], [0.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -5, 5, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 1, 0, 0, -6, 8, 0, 0, 0, 0, 0], [3.0, 5.0, 3.0, -2.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 1, 0, 0, -2, 0, 3, 0, 0, 0, 0], [89.0, -16.0, -9.0, -48.0]),
    // 91-100
    PlanetaryTerm::new([-2, 0, 1, 1, 0, 0, 0, 1, 0, -3, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 1, 1, 1, 0, 0, 1, 0, -3, 0, 0, 0, 0], [-3.0, 7.0, 4.0, 2.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -3, 0, 0, 0, 0], [-349.0, -62.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 6, -8, 0, 0, 0, 0, 0], [-15.0, 22.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -1, -5, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 1, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [-53.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 1, 1, 1, 0, -20, 20, 0, 0, 0, 0, 0, 0], [5.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 20, -21, 0, 0, 0, 0, 0, 0], [0.0, -8.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 8, -15, 0, 0, 0, 0, 0], [15.0, -7.0, -4.0, -8.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -10, 15, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    // 101-110
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0], [-21.0, -78.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0], [20.0, -70.0, -37.0, -11.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, 1, 0, 0, 0, 0], [0.0, 6.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, -2, 4, 0, 0, 0], [5.0, 3.0, 2.0, -2.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 1, 0, -6, 8, 0, 0, 0, 0, 0, 0], [-17.0, -4.0, -2.0, 9.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 1, 0, 5, -6, 0, 0, 0, 0, 0, 0], [0.0, 6.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 1], [32.0, 15.0, -8.0, 17.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, -1, 0, 0, 0], [174.0, 84.0, 45.0, -93.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0], [11.0, 56.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 1, 0, 0, 0], [-66.0, -12.0, -6.0, 35.0]),
    // 111-120
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1], [47.0, 8.0, 4.0, -25.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2], [0.0, 8.0, 4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -9, 13, 0, 0, 0, 0, 0], [10.0, -22.0, -12.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 7, -13, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 5, -6, 0, 0, 0, 0, 0], [-24.0, 12.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 9, -17, 0, 0, 0, 0, 0], [5.0, -6.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -9, 17, 0, 0, 0, 0, 2], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([1, 0, 0, -1, 1, 0, 0, -3, 4, 0, 0, 0, 0, 0], [4.0, 3.0, 1.0, -2.0]),
    PlanetaryTerm::new([1, 0, 0, -1, 1, 0, -3, 4, 0, 0, 0, 0, 0, 0], [0.0, 29.0, 15.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 2, 0, 0, -1, 2, 0, 0, 0, 0, 0], [-5.0, -4.0, -2.0, 2.0]),
    // 121-130
    PlanetaryTerm::new([0, 0, -1, 1, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0], [8.0, -3.0, -1.0, -5.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 0, 1, 0, -2, 0, 0, 0, 0, 0, 0], [0.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -5, 0, 2, 0, 0, 0, 0], [10.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 2, 0, -3, 1, 0, 0, 0], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 3, -3, 0, 0, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 8, -13, 0, 0, 0, 0, 0, 0], [46.0, 66.0, 35.0, -25.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 8, -12, 0, 0, 0, 0, 0, 0], [-14.0, 7.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, -8, 11, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 2.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 1, 0, 0, 0, 2, -2, 0, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 1, 0, 18, -16, 0, 0, 0, 0, 0, 0], [-68.0, -34.0, -18.0, 36.0]),
    // 131-140
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, -1, 1, 0, 0, 0], [0.0, 14.0, 7.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 3, -7, 4, 0, 0, 0, 0, 0], [10.0, -6.0, -3.0, -5.0]),
    PlanetaryTerm::new([-2, 0, 1, 1, 1, 0, 0, -3, 7, 0, 0, 0, 0, 0], [-5.0, -4.0, -2.0, 3.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, -2, 5, 0, 0, 0], [-3.0, 5.0, 2.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, -2, 5, 0, 0, 0], [76.0, 17.0, 9.0, -41.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -4, 8, -3, 0, 0, 0, 0], [84.0, 298.0, 159.0, -45.0]),
    PlanetaryTerm::new([1, 0, 0, 0, 1, 0, -10, 3, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -2, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 1, 0, 10, -3, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 4, -8, 3, 0, 0, 0, 0], [-82.0, 292.0, 156.0, 44.0]),
    // 141-150
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, 2, -5, 0, 0, 0], [-73.0, 17.0, 9.0, 39.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 2, -5, 0, 0, 0], [-9.0, -16.0, 0.0, 0.0]),
    PlanetaryTerm::new([2, 0, -1, -1, 1, 0, 0, 3, -7, 0, 0, 0, 0, 0], [3.0, 0.0, -1.0, -2.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, 0, -5, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -3, 7, -4, 0, 0, 0, 0, 0], [-9.0, -5.0, -3.0, 5.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-439.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, 0, 1, 0, -18, 16, 0, 0, 0, 0, 0, 0], [57.0, -28.0, -15.0, -30.0]),
    PlanetaryTerm::new([-2, 0, 1, 1, 1, 0, 0, 1, 0, -2, 0, 0, 0, 0], [0.0, -6.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, -8, 12, 0, 0, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -8, 13, 0, 0, 0, 0, 0, 0], [-40.0, 57.0, 30.0, 21.0]),
    // 151-160
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 0, 0, 0, 1], [23.0, 7.0, 3.0, -13.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, 0, -2, 0, 0, 0, 0, 0], [273.0, 80.0, 43.0, -146.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 0, 0, 0, 0], [-449.0, 430.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -2, 2, 0, 0, 0, 0, 0], [-8.0, -47.0, -25.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 2, 0, 0, 0, 0, 1], [6.0, 47.0, 25.0, -3.0]),
    PlanetaryTerm::new([-1, 0, 0, 1, 1, 0, 3, -4, 0, 0, 0, 0, 0, 0], [0.0, 23.0, 13.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 1, 1, 0, 0, 3, -4, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, -2, 0, 0, 0], [3.0, -4.0, -2.0, -2.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 2, 0, 0, 0], [-48.0, -110.0, -59.0, 26.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1], [51.0, 114.0, 61.0, -27.0]),
    // 161-170
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2], [-133.0, 0.0, 0.0, 57.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 0, 0, 3, -6, 0, 0, 0, 0, 0, 0], [0.0, 4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -3, 5, 0, 0, 0, 0, 0, 0], [-21.0, -6.0, -3.0, 11.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, -3, 4, 0, 0, 0, 0, 0, 0], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -2, 4, 0, 0, 0, 0, 0], [-11.0, -21.0, -11.0, 6.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, -5, 6, 0, 0, 0, 0, 0, 0], [-18.0, -436.0, -233.0, 9.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 5, -7, 0, 0, 0, 0, 0, 0], [35.0, -7.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 5, -8, 0, 0, 0, 0, 0, 0], [0.0, 5.0, 3.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 6, -8, 0, 0, 0, 0, 0, 0], [11.0, -3.0, -1.0, -6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -8, 15, 0, 0, 0, 0, 0], [-5.0, -3.0, -1.0, 3.0]),
    // 171-180
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 2, 0, -3, 0, 0, 0, 0], [-53.0, -9.0, -5.0, 28.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 1, 0, 0, 6, -8, 0, 0, 0, 0, 0], [0.0, 3.0, 2.0, 1.0]),
    PlanetaryTerm::new([1, 0, 0, -1, 1, 0, 0, -1, 0, 1, 0, 0, 0, 0], [4.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 3, -5, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, -1, 0, 0, 0, 0], [-50.0, 194.0, 103.0, 27.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 1], [-13.0, 52.0, 28.0, 7.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0], [-91.0, 248.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1], [6.0, 49.0, 26.0, -3.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 1, 0, 0, 0, 0], [-6.0, -47.0, -25.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1], [0.0, 5.0, 3.0, 0.0]),
    // 181-190
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2], [52.0, 23.0, 10.0, -23.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, 0, -1, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0], [0.0, 5.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 0, -1, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -7, 13, 0, 0, 0, 0, 2], [-4.0, 8.0, 3.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 7, -13, 0, 0, 0, 0, 0], [10.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 1, 0, 0, -5, 6, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -8, 11, 0, 0, 0, 0, 0], [0.0, 8.0, 4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, -1, 0, 2, 0, 0, 0, 0, 0, 0], [0.0, 8.0, 4.0, 1.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 4, -4, 0, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    // 191-200
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -2, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 3, 0, 0, 0], [-8.0, 4.0, 2.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1], [8.0, -4.0, -2.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 2], [0.0, 15.0, 7.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 3, -3, 0, 0, 0, 0, 0, 0], [-138.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 2, 0, 0, -4, 8, -3, 0, 0, 0, 0], [0.0, -7.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 2, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, -7.0, -3.0, 0.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 1, 0, 0, -2, 0, 2, 0, 0, 0, 0], [54.0, 0.0, 0.0, -29.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, 2, 0, 0, 0, 0], [0.0, 10.0, 4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, 0, -2, 0, 0, 0, 0, 0], [-7.0, 0.0, 0.0, 3.0]),
    // 201-210
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 1, -2, 0, 0, 0, 0, 0], [-37.0, 35.0, 19.0, 20.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 2, -2, 0, 0, 0, 0, 0], [0.0, 4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, 0, -2, 0, 0, 0], [-4.0, 9.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -2, 0, 0, 2, 0, 0, 0], [8.0, 0.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 3, -6, 0, 0, 0, 0, 0, 0], [-9.0, -14.0, -8.0, 5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -5, 0, 0, 0, 0, 0, 1], [-3.0, -9.0, -5.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -5, 0, 0, 0, 0, 0, 0], [-145.0, 47.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -3, 4, 0, 0, 0, 0, 0, 0], [-10.0, 40.0, 21.0, 5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 5, 0, 0, 0, 0, 0, 1], [11.0, -49.0, -26.0, -7.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 5, 0, 0, 0, 0, 0, 2], [-2150.0, 0.0, 0.0, 932.0]),
    // 211-220
    PlanetaryTerm::new([0, 0, 2, -2, 2, 0, -3, 3, 0, 0, 0, 0, 0, 0], [-12.0, 0.0, 0.0, 5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 5, 0, 0, 0, 0, 0, 2], [85.0, 0.0, 0.0, -37.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, -4, 0, 0, 0, 0, 1], [4.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, 1, -4, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, -4, 0, 0, 0, 0, 0], [-86.0, 153.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 4, 0, 0, 0, 0, 1], [-6.0, 9.0, 5.0, 3.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -3, 4, 0, 0, 0, 0, 0], [9.0, -13.0, -7.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 4, 0, 0, 0, 0, 1], [-8.0, 12.0, 6.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 4, 0, 0, 0, 0, 2], [-51.0, 0.0, 0.0, 22.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 8, 0, 0, 0, 0, 0, 2], [-11.0, -268.0, -116.0, 5.0]),
    // 221-230
    PlanetaryTerm::new([0, 0, 2, -2, 2, 0, -5, 6, 0, 0, 0, 0, 0, 0], [0.0, 12.0, 5.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 8, 0, 0, 0, 0, 0, 2], [0.0, 7.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 8, 0, 0, 0, 0, 0, 1], [31.0, 6.0, 3.0, -17.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -5, 7, 0, 0, 0, 0, 0, 0], [140.0, 27.0, 14.0, -75.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 8, 0, 0, 0, 0, 0, 1], [57.0, 11.0, 6.0, -30.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -8, 0, 0, 0, 0, 0, 0], [-14.0, -39.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, 0, -1, 0, -1, 0, 0, 0, 0], [0.0, -6.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, -1, 0, 0, 0, 0], [4.0, 15.0, 8.0, -2.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [0.0, 4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -2, 0, 1, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    // 231-240
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -6, 11, 0, 0, 0, 0, 2], [0.0, 11.0, 5.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -11, 0, 0, 0, 0, 0], [9.0, 6.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, -1, 0, 4, 0, 0, 0, 0, 0, 2], [-4.0, 10.0, 4.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 1, 0, -4, 0, 0, 0, 0, 0, 0], [5.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([2, 0, 0, -2, 1, 0, -3, 3, 0, 0, 0, 0, 0, 0], [16.0, 0.0, 0.0, -9.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 2, 0, 0, -2, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -7, 9, 0, 0, 0, 0, 0], [0.0, 3.0, 2.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 4, -5, 0, 0, 2], [7.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0], [-25.0, 22.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1], [42.0, 223.0, 119.0, -22.0]),
    // 241-250
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 2, 0, 0, 0, 0], [-27.0, -143.0, -77.0, 14.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1], [9.0, 49.0, 26.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2], [-1166.0, 0.0, 0.0, 505.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 2, 0, 0, -2, 0, 2, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 2], [-6.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 3, -5, 0, 0, 0, 0, 0, 0], [-8.0, 0.0, 1.0, 4.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 3, -4, 0, 0, 0, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, -3, 3, 0, 0, 0, 0, 0, 0], [117.0, 0.0, 0.0, -63.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 2, -4, 0, 0, 0, 0, 0], [-4.0, 8.0, 4.0, 2.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -4, 4, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -2.0]),
    // 251-260
    PlanetaryTerm::new([0, 0, 1, -1, 2, 0, -5, 7, 0, 0, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -6, 0, 0, 0, 0, 0], [0.0, 31.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 6, 0, 0, 0, 0, 1], [-5.0, 0.0, 1.0, 3.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -4, 6, 0, 0, 0, 0, 0], [4.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 6, 0, 0, 0, 0, 1], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 6, 0, 0, 0, 0, 2], [-24.0, -13.0, -6.0, 10.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 2, -2, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 2, -3, 0, 0, 0, 0, 0, 0], [0.0, -32.0, -17.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 9, 0, 0, 0, 0, 2], [8.0, 12.0, 5.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 9, 0, 0, 0, 0, 1], [3.0, 0.0, 0.0, -1.0]),
    // 261-270
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -9, 0, 0, 0, 0, 0], [7.0, 13.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 0, 1, 0, -2, 0, 0, 0, 0], [-3.0, 16.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -2, 0, 2, 0, 0, 0, 0], [50.0, 0.0, 0.0, -27.0]),
    PlanetaryTerm::new([-2, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, -5.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 0, 0, 3, -3, 0, 0, 0, 0, 0, 0], [13.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 10, 0, 0, 0, 0, 0, 1], [0.0, 5.0, 3.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 10, 0, 0, 0, 0, 0, 2], [24.0, 5.0, 2.0, -11.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 3, 0, 0, 0, 0, 0, 2], [5.0, -11.0, -5.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 3, 0, 0, 0, 0, 0, 1], [30.0, -3.0, -2.0, -16.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -2, 2, 0, 0, 0, 0, 0, 0], [18.0, 0.0, 0.0, -9.0]),
    // 271-280
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -3, 0, 0, 0, 0, 0, 0], [8.0, 614.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -3, 0, 0, 0, 0, 0, 1], [3.0, -3.0, -1.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1], [6.0, 17.0, 9.0, -3.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, -1, 0, 3, 0, 0, 0, 0], [-3.0, -9.0, -5.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1], [0.0, 6.0, 3.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 2], [-127.0, 21.0, 9.0, 55.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -8, 0, 0, 0, 0, 0], [3.0, 5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -4, 8, 0, 0, 0, 0, 2], [-6.0, -10.0, -4.0, 3.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [5.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -4, 7, 0, 0, 0, 0, 2], [16.0, 9.0, 4.0, -7.0]),
    // 281-290
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -4, 7, 0, 0, 0, 0, 1], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -7, 0, 0, 0, 0, 0], [0.0, 22.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -2, 3, 0, 0, 0, 0, 0, 0], [0.0, 19.0, 10.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -2, 0, 3, 0, 0, 0, 0], [7.0, 0.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 10, 0, 0, 0, 0, 2], [0.0, -5.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -1, 2, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 2], [-9.0, 3.0, 1.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 5, 0, 0, 0, 0, 2], [17.0, 0.0, 0.0, -7.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 5, 0, 0, 0, 0, 1], [0.0, -3.0, -2.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -5, 0, 0, 0, 0, 0], [-20.0, 34.0, 0.0, 0.0]),
    // 291-300
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, -2, 0, 0, 0, 0, 0, 1], [-10.0, 0.0, 1.0, 5.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 1, -3, 0, 0, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, -2, 0, 0, 0, 0, 0, 0], [22.0, -87.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 2, 0, 0, 0, 0, 0, 1], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 2, 0, 0, 0, 0, 0, 2], [-3.0, -6.0, -2.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 11, 0, 0, 0, 0, 0, 2], [-16.0, -3.0, -1.0, 7.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 11, 0, 0, 0, 0, 0, 1], [0.0, -3.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, -2, 2, 0, 0, 4, -4, 0, 0, 0, 0, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, -3, 0, 0, 0, 0, 0], [-68.0, 39.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, -4, 4, 0, 0, 0, 0, 0, 0], [27.0, 0.0, 0.0, -14.0]),
    // 301-310
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 4, -5, 0, 0, 0, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0], [-25.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 7, 0, 0, 0, 0, 0, 1], [-12.0, -3.0, -2.0, 6.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -4, 6, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 7, 0, 0, 0, 0, 0, 2], [3.0, 66.0, 29.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 6, 0, 0, 0, 0, 0, 2], [490.0, 0.0, 0.0, -213.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 6, 0, 0, 0, 0, 0, 1], [-22.0, 93.0, 49.0, 12.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -4, 5, 0, 0, 0, 0, 0, 0], [-7.0, 28.0, 15.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 6, 0, 0, 0, 0, 0, 1], [-3.0, 13.0, 7.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -6, 0, 0, 0, 0, 0, 0], [-46.0, 14.0, 0.0, 0.0]),
    // 311-320
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 2, -2, 0, 0, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0], [2.0, 1.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, -1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], [0.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 1, -1, 0, 0, 0, 0, 0, 0], [-28.0, 0.0, 0.0, 15.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 5, 0, 0, 0, 2], [5.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, -3, 0, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 3, 0, 0, 0, 0, 2], [-11.0, 0.0, 0.0, 5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -7, 12, 0, 0, 0, 0, 2], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 1, 0, 0, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 1, 0, 0, 0, 0, 0, 1], [25.0, 106.0, 57.0, -13.0]),
    // 321-330
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -1, 0, 0, 0, 0, 0, 0, 0], [5.0, 21.0, 11.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0], [1485.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 1], [-7.0, -32.0, -17.0, 4.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 1, -2, 0, 0, 0, 0, 0, 0], [0.0, 5.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 5, 0, 0, 0, 0, 2], [-6.0, -3.0, -2.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 4, 0, 0, 0, 2], [30.0, -6.0, -2.0, -13.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -4, 0, 0, 0, 0], [-4.0, 4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -1, 1, 0, 0, 0, 0, 0, 0], [-19.0, 0.0, 0.0, 10.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -6, 10, 0, 0, 0, 0, 2], [0.0, 4.0, 2.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -6, 10, 0, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    // 331-340
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -3, 0, 3, 0, 0, 0, 0], [4.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 7, 0, 0, 0, 0, 2], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 4, -4, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 8, 0, 0, 0, 0, 2], [5.0, 3.0, 1.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -8, 0, 0, 0, 0, 0], [0.0, 11.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 3, 0, 0, 0, 2], [118.0, 0.0, 0.0, -52.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 3, 0, 0, 0, 1], [0.0, -5.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -3, 0, 0, 0, 0], [-28.0, 36.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -4, 0, 0, 0, 0, 0, 0], [5.0, -5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 4, 0, 0, 0, 0, 0, 1], [14.0, -59.0, -31.0, -8.0]),
    // 341-350
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -2, 3, 0, 0, 0, 0, 0, 0], [0.0, 9.0, 5.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 4, 0, 0, 0, 0, 0, 2], [-458.0, 0.0, 0.0, 198.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 9, 0, 0, 0, 0, 0, 2], [0.0, -45.0, -20.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 9, 0, 0, 0, 0, 0, 1], [9.0, 0.0, 0.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 6, -9, 0, 0, 0, 0, 0, 0], [0.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 1, 0, -2, 0, 0, 0, 0], [0.0, -4.0, -2.0, -1.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, -2, 2, 0, 0, 0, 0, 0, 0], [11.0, 0.0, 0.0, -6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -4, 6, 0, 0, 0, 0, 2], [6.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -6, 0, 0, 0, 0, 0], [-16.0, 23.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 3, -4, 0, 0, 0, 0, 0, 0], [0.0, -4.0, -2.0, 0.0]),
    // 351-360
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 2, 0, 0, 0, 2], [-5.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -2, 0, 0, 0, 0], [-166.0, 269.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 1, 0, -1, 0, 0, 0, 0], [15.0, 0.0, 0.0, -8.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 9, 0, 0, 0, 0, 0, 2], [10.0, 0.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -4, 0, 0, 0, 0, 0], [-78.0, 45.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 4, 0, 0, 0, 0, 0, 2], [0.0, -5.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 4, 0, 0, 0, 0, 0, 1], [7.0, 0.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -4, 0, 0, 0, 0, 0, 0], [-5.0, 328.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -4, 0, 0, 0, 0, 0, 1], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 2, -2, 0, 0, 0, 0, 0], [5.0, 0.0, 0.0, -2.0]),
    // 361-370
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -1, 0, 2, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -3, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, -5, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, 0, 1], [0.0, -4.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [-1223.0, -26.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -1, 0, 0, 0, 1], [0.0, 7.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -3, 5, 0, 0, 0], [3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -3, 4, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -2, 0, 0, 0], [-6.0, 20.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, -2, 0, 0, 0, 0, 0], [-368.0, 0.0, 0.0, 0.0]),
    // 371-380
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -1, 0, 0, 0], [-75.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -1, 0, 1, 0, 0, 0, 0], [11.0, 0.0, 0.0, -6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, -2, 2, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 14, 0, 0, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 2, -5, 0, 0, 0], [-13.0, -30.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -8, 3, 0, 0, 0, 0], [21.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -8, 3, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 1], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], [8.0, -27.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -8, 3, 0, 0, 0, 0], [-19.0, -11.0, 0.0, 0.0]),
    // 381-390
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 8, -3, 0, 0, 0, 2], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, -2, 5, 0, 0, 2], [0.0, 5.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 12, 0, 0, 0, 0, 0, 2], [-6.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 12, 0, 0, 0, 0, 0, 0], [-8.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, -2, 0, 0, 0], [-1.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 2], [-14.0, 0.0, 0.0, 6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0], [6.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2], [-74.0, 0.0, 0.0, 32.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 2], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, -5, 5, 0, 0, 0, 0, 0, 0], [4.0, 0.0, 0.0, -2.0]),
    // 391-400
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0], [8.0, 11.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1], [0.0, 3.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 2], [-262.0, 0.0, 0.0, 114.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -6, 0, 0, 0, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 6, 0, 0, 0, 0, 0, 1], [-7.0, 0.0, 0.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 6, 0, 0, 0, 0, 0, 2], [0.0, -27.0, -12.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 4, 0, 0, 0, 0, 2], [-19.0, -8.0, -4.0, 8.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 7, 0, 0, 0, 0, 0, 2], [202.0, 0.0, 0.0, -87.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 7, 0, 0, 0, 0, 0, 1], [-8.0, 35.0, 19.0, 5.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -5, 6, 0, 0, 0, 0, 0, 0], [0.0, 4.0, 2.0, 0.0]),
    // 401-410
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -7, 0, 0, 0, 0, 0, 0], [16.0, -5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -1, 0, 1, 0, 0, 0, 0], [5.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, 0, 0], [0.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, -1, 0, 3, 0, 0, 0, 0, 0, 2], [1.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 2], [-35.0, -48.0, -21.0, 15.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 6, 0, 0, 0, 0, 2], [-3.0, -5.0, -2.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 2, -2, 0, 0, 0, 0, 0, 0], [6.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -6, 9, 0, 0, 0, 0, 2], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -9, 0, 0, 0, 0, 0], [0.0, -5.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 2, 0, 0, 0, 0, 0, 1], [12.0, 55.0, 29.0, -6.0]),
    // 411-420
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -2, 1, 0, 0, 0, 0, 0, 0], [0.0, 5.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -2, 0, 0, 0, 0, 0, 0], [-598.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -2, 0, 0, 0, 0, 0, 1], [-3.0, -13.0, -7.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 3, 0, 0, 0, 2], [-5.0, -7.0, -3.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 7, 0, 0, 0, 0, 2], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -7, 0, 0, 0, 0, 0], [5.0, -7.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, -2, 2, 0, 0, 0, 0, 0, 0], [4.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -5, 0, 0, 0, 0, 0], [16.0, -6.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, -3, 0, 0, 0, 0, 0, 0], [8.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 3, 0, 0, 0, 0, 0, 1], [8.0, -31.0, -16.0, -4.0]),
    // 421-430
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, -1, 2, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 3, 0, 0, 0, 0, 0, 2], [113.0, 0.0, 0.0, -49.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 10, 0, 0, 0, 0, 0, 2], [0.0, -24.0, -10.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 10, 0, 0, 0, 0, 0, 1], [4.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -3, 0, 0, 0, 0, 0], [27.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 8, 0, 0, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 5, 0, 0, 0, 0, 0, 2], [0.0, -4.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 5, 0, 0, 0, 0, 0, 1], [5.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -5, 0, 0, 0, 0, 0, 0], [0.0, -3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 2], [-13.0, 0.0, 0.0, 6.0]),
    // 431-440
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 0, 5, 0, 0, 0, 2], [5.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2], [-18.0, -10.0, -4.0, 8.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], [-4.0, -28.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2], [-5.0, 6.0, 3.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 13, 0, 0, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 5, 0, 0, 0, 0, 2], [-5.0, -9.0, -4.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 0, 4, 0, 0, 0, 2], [17.0, 0.0, 0.0, -7.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -4, 0, 0, 0, 0], [11.0, 4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 7, 0, 0, 0, 0, 2], [0.0, -6.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -3, 0, 0, 0, 0], [83.0, 15.0, 0.0, 0.0]),
    // 441-450
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 5, 0, 0, 0, 0, 0, 1], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 5, 0, 0, 0, 0, 0, 2], [0.0, -114.0, -49.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 8, 0, 0, 0, 0, 0, 2], [117.0, 0.0, 0.0, -51.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 8, 0, 0, 0, 0, 0, 1], [-5.0, 19.0, 10.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 6, -8, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 1, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 9, 0, 0, 0, 0, 2], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -6, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -6, 0, 0, 0, 0, 2], [0.0, -6.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [393.0, 3.0, 0.0, 0.0]),
    // 451-460
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -2, 0, 0, 0, 1], [-4.0, 21.0, 11.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -2, 0, 0, 0, 2], [-6.0, 0.0, -1.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 10, 0, 0, 0, 0, 0, 2], [-3.0, 8.0, 4.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -4, 0, 0, 0, 0, 0], [8.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -4, 0, 0, 0, 0, 2], [18.0, -29.0, -13.0, -8.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 3, 0, 0, 0, 0, 0, 1], [8.0, 34.0, 18.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -3, 0, 0, 0, 0, 0, 0], [89.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -3, 0, 0, 0, 0, 0, 1], [3.0, 12.0, 6.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -3, 0, 0, 0, 0, 0, 2], [54.0, -15.0, -7.0, -24.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, -3, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    // 461-470
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 13, 0, 0, 0, 0, 2], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -1, 0, 0, 0, 0], [0.0, 35.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -1, 0, 0, 0, 2], [-154.0, -30.0, -13.0, 67.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, -2, 0, 0, 0], [15.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, -2, 0, 0, 1], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -2, 0, 0, 0, 0, 0], [0.0, 9.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -2, 0, 0, 0, 0, 2], [80.0, -71.0, -31.0, -35.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, -1, 0, 0, 2], [0.0, -20.0, -9.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -6, 15, 0, 0, 0, 0, 2], [11.0, 5.0, 2.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 15, 0, 0, 0, 0, 0, 2], [61.0, -96.0, -42.0, -27.0]),
    // 471-480
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 9, -4, 0, 0, 0, 0, 2], [14.0, 9.0, 4.0, -6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 2, -5, 0, 0, 2], [-11.0, -6.0, -3.0, 5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 8, -1, -5, 0, 0, 2], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -8, 3, 0, 0, 0, 2], [123.0, -415.0, -180.0, -53.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0], [0.0, 0.0, 0.0, -35.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1], [7.0, -32.0, -17.0, -4.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, -9.0, -5.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1], [0.0, -4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2], [-89.0, 0.0, 0.0, 38.0]),
    // 481-490
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -6, 16, -4, -5, 0, 0, 2], [0.0, -86.0, -19.0, -6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 8, -3, 0, 0, 0, 2], [0.0, 0.0, -19.0, 6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -2, 8, -3, 0, 0, 0, 2], [-123.0, -416.0, -180.0, 53.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -8, 1, 5, 0, 0, 2], [0.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -2, 5, 0, 0, 2], [12.0, -6.0, -3.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -5, 4, 0, 0, 0, 0, 2], [-13.0, 9.0, 4.0, 6.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 11, 0, 0, 0, 0, 0, 2], [0.0, -15.0, -7.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 11, 0, 0, 0, 0, 0, 1], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 11, 0, 0, 0, 0, 0, 2], [-62.0, -97.0, -42.0, 27.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 2], [-11.0, 5.0, 2.0, 5.0]),
    // 491-500
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 2], [0.0, -19.0, -8.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -3, 0, 2, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, -1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, -4, 8, -3, 0, 0, 0, 0], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 2], [-85.0, -70.0, -31.0, 37.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 2], [163.0, -12.0, -5.0, -72.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 7, 0, 0, 0, 0, 0, 2], [-63.0, -16.0, -7.0, 28.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 2], [-21.0, -32.0, -14.0, 9.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 6, 0, 0, 0, 0, 0, 2], [0.0, -3.0, -1.0, 0.0]),
    // 501-510
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 6, 0, 0, 0, 0, 0, 1], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -6, 0, 0, 0, 0, 0, 0], [0.0, 8.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -6, 0, 0, 0, 0, 0, 2], [3.0, 10.0, 4.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 2], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 6, 0, 0, 0, 0, 2], [0.0, -7.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 7, -9, 0, 0, 0, 0, 2], [0.0, -4.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -1, 0, 0, 0, 0, 0, 0], [6.0, 19.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, -1, 0, 0, 0, 0, 0, 2], [5.0, -173.0, -75.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -7, 0, 0, 0, 0, 2], [0.0, -7.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -5, 0, 0, 0, 0, 2], [7.0, -12.0, -5.0, -3.0]),
    // 511-520
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 4, 0, 0, 0, 0, 0, 1], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -1, 4, 0, 0, 0, 0, 0, 2], [3.0, -4.0, -2.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 9, 0, 0, 0, 0, 0, 2], [74.0, 0.0, 0.0, -32.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 9, 0, 0, 0, 0, 0, 1], [-3.0, 12.0, 6.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -3, 0, 0, 0, 0, 2], [26.0, -14.0, -6.0, -11.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, -1, 0, 0, 0, 0, 2], [19.0, 0.0, 0.0, -8.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -4, 4, 0, 0, 0, 0, 0, 1], [6.0, 24.0, 13.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -4, 0, 0, 0, 0, 0, 0], [83.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -4, 0, 0, 0, 0, 0, 1], [0.0, -10.0, -5.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -4, 0, 0, 0, 0, 0, 2], [11.0, -3.0, -1.0, -5.0]),
    // 521-530
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 2], [3.0, 0.0, 1.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -3, 0, 5, 0, 0, 0, 2], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1], [5.0, -23.0, -12.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 2], [-339.0, 0.0, 0.0, 147.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 12, 0, 0, 0, 0, 0, 2], [0.0, -10.0, -5.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -4, 0, 0, 0, 0], [5.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 1, -1, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 7, -8, 0, 0, 0, 0, 2], [0.0, -4.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -3, 0, 0, 0, 0], [18.0, -3.0, 0.0, 0.0]),
    // 531-540
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -3, 0, 0, 0, 2], [9.0, -11.0, -5.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -2, 6, 0, 0, 0, 0, 0, 2], [-8.0, 0.0, 0.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 7, 0, 0, 0, 0, 0, 1], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 6, -7, 0, 0, 0, 0, 0, 0], [0.0, 9.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -6, 0, 0, 0, 0, 2], [6.0, -9.0, -4.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -2, 0, 0, 0, 0], [-4.0, -12.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -2, 0, 0, 0, 2], [67.0, -91.0, -39.0, -29.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -4, 0, 0, 0, 0, 2], [30.0, -18.0, -8.0, -13.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -2, 0, 0, 0, 0, 0, 0], [0.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -2, 0, 0, 0, 0, 0, 2], [0.0, -114.0, -50.0, 0.0]),
    // 541-550
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -1, 0, 0, 0, 2], [0.0, 0.0, 0.0, 23.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, -1, 0, 0, 0, 2], [517.0, 16.0, 7.0, -224.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, 0, -2, 0, 0, 2], [0.0, -7.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, -2, 0, 0, 0, 0, 2], [143.0, -3.0, -1.0, -62.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, 0, -1, 0, 0, 2], [29.0, 0.0, 0.0, -13.0]),
    PlanetaryTerm::new([0, 0, 2, -2, 1, 0, 0, 1, 0, -1, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 16, 0, 0, 0, 0, 0, 2], [-6.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, 2, -5, 0, 0, 2], [5.0, 12.0, 5.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 7, -8, 3, 0, 0, 0, 2], [-25.0, 0.0, 0.0, 11.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -5, 16, -4, -5, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    // 551-560
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 2], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, -1, 8, -3, 0, 0, 0, 2], [-22.0, 12.0, 5.0, 10.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 10, 0, 0, 0, 0, 0, 2], [50.0, 0.0, 0.0, -22.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 10, 0, 0, 0, 0, 0, 1], [0.0, 7.0, 4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 10, 0, 0, 0, 0, 0, 2], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 2], [-4.0, 4.0, 2.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 0, 0, 0, 2], [-5.0, -11.0, -5.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -3, 8, 0, 0, 0, 0, 0, 2], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -5, 5, 0, 0, 0, 0, 0, 1], [4.0, 17.0, 9.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -5, 0, 0, 0, 0, 0, 0], [59.0, 0.0, 0.0, 0.0]),
    // 561-570
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -5, 0, 0, 0, 0, 0, 1], [0.0, -4.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -5, 0, 0, 0, 0, 0, 2], [-8.0, 0.0, 0.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1], [4.0, -15.0, -8.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2], [370.0, -8.0, 0.0, -160.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 7, -7, 0, 0, 0, 0, 2], [0.0, 0.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 7, -7, 0, 0, 0, 0, 2], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -5, 0, 0, 0, 0, 2], [-6.0, 3.0, 1.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 7, -8, 0, 0, 0, 0, 0, 0], [0.0, 6.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -3, 0, 0, 0, 0, 2], [-10.0, 0.0, 0.0, 4.0]),
    // 571-580
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -3, 0, 0, 0, 0, 0, 2], [0.0, 9.0, 4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 2], [4.0, 17.0, 7.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 11, 0, 0, 0, 0, 0, 2], [34.0, 0.0, 0.0, -15.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 11, 0, 0, 0, 0, 0, 1], [0.0, 5.0, 3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, 0, -4, 0, 0, 0, 2], [-5.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, 0, -3, 0, 0, 0, 2], [-37.0, -7.0, -3.0, 16.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -6, 6, 0, 0, 0, 0, 0, 1], [3.0, 13.0, 7.0, -2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 6, -6, 0, 0, 0, 0, 0, 0], [40.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 6, -6, 0, 0, 0, 0, 0, 1], [0.0, -3.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, 0, -2, 0, 0, 0, 2], [-184.0, -3.0, -1.0, 80.0]),
    // 581-590
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, -4, 0, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -1, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -1, 0, 0, 0, 0, 0, 1], [0.0, -10.0, -6.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, -1, 0, 0, 0, 0, 0, 2], [31.0, -6.0, 0.0, -13.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, 0, -1, 0, 0, 0, 2], [-3.0, -32.0, -14.0, 1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, 0, 0, -2, 0, 0, 2], [-7.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, -2, 0, 0, 0, 0, 2], [0.0, -8.0, -4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0], [3.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 8, -9, 0, 0, 0, 0, 0, 0], [0.0, 4.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -4, 0, 0, 0, 0, 0, 2], [0.0, 3.0, 1.0, 0.0]),
    // 591-600
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 2], [19.0, -23.0, -10.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1], [0.0, 0.0, 0.0, -10.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1], [0.0, 3.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -7, 7, 0, 0, 0, 0, 0, 1], [0.0, 9.0, 5.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 7, -7, 0, 0, 0, 0, 0, 0], [28.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -2, 0, 0, 0, 0, 0, 1], [0.0, -7.0, -4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -2, 0, 0, 0, 0, 0, 2], [8.0, -4.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -2, 0, 0, 0, 0, 0, 0], [0.0, 0.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 4, -2, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, 0, -4, 0, 0, 0, 2], [-3.0, 0.0, 0.0, 1.0]),
    // 601-610
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, 0, -3, 0, 0, 0, 2], [-9.0, 0.0, 1.0, 4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 5, 0, -2, 0, 0, 0, 2], [3.0, 12.0, 5.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 2], [17.0, -3.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -8, 8, 0, 0, 0, 0, 0, 1], [0.0, 7.0, 4.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 8, -8, 0, 0, 0, 0, 0, 0], [19.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -3, 0, 0, 0, 0, 0, 1], [0.0, -5.0, -3.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 5, -3, 0, 0, 0, 0, 0, 2], [14.0, -3.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 9, 0, 0, 0, 0, 0, 1], [0.0, 0.0, -1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 9, 0, 0, 0, 0, 0, 1], [0.0, 0.0, 0.0, -5.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, -9, 9, 0, 0, 0, 0, 0, 1], [0.0, 5.0, 3.0, 0.0]),
    // 611-620
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 9, -9, 0, 0, 0, 0, 0, 0], [13.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 6, -4, 0, 0, 0, 0, 0, 1], [0.0, -3.0, -2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 2], [2.0, 9.0, 4.0, 3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0], [0.0, 0.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0], [8.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 1], [0.0, 4.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 2], [6.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0], [6.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 1], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 2], [5.0, 0.0, 0.0, -2.0]),
    // 621-630
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 2, -2, 0, 0, 0, 0, 0, 0], [6.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [7.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 3, -3, 0, 0, 0, 0, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [6.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 2, 0, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 0, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 2, 0, 0, 0, 4, -8, 3, 0, 0, 0, 0], [5.0, 0.0, 0.0, 0.0]),
    // 631-640
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 0, 2, 0, -3, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 2, 0, 0, 2, -2, 0, 0, 0, 0, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, -1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 2, 0, 0, 0, 2, 0, -3, 0, 0, 0, 0], [13.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-2, 0, 0, 0, 0, 0, 0, 2, 0, -3, 0, 0, 0, 0], [21.0, 11.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, 0, 0, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, -5.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 1, -1, 1, 0, 0, -1, 0, 0, 0, 0, 0, 0], [0.0, -5.0, -2.0, 0.0]),
    PlanetaryTerm::new([1, 0, 1, -1, 1, 0, 0, -1, 0, 0, 0, 0, 0, 0], [0.0, 5.0, 3.0, 0.0]),
    // 641-650
    PlanetaryTerm::new([-1, 0, 0, 0, 0, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, -5.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 2, 1, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([0, 0, 0, 0, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [20.0, 10.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 2, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-34.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 0, 2, 0, 0, 3, -3, 0, 0, 0, 0, 0, 0], [-19.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, -2, 1, 0, 0, -2, 0, 2, 0, 0, 0, 0], [3.0, 0.0, 0.0, -2.0]),
    PlanetaryTerm::new([1, 0, 2, -2, 2, 0, -3, 3, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([1, 0, 2, -2, 2, 0, 0, -2, 0, 2, 0, 0, 0, 0], [-6.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([1, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([1, 0, 0, 0, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [3.0, 0.0, 0.0, 0.0]),
    // 651-660
    PlanetaryTerm::new([0, 0, 0, -2, 0, 0, 2, -2, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, -2, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0], [4.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, -2, 2, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 0, -1, 0, 1, 0, 0, 0, 0], [6.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, -1, 1, 0, 0, 0, 0, 0, 0], [-8.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, -2, 3, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 0, 2, 0, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    PlanetaryTerm::new([0, 0, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, -3.0, -2.0, 0.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0], [126.0, -63.0, -27.0, -55.0]),
    PlanetaryTerm::new([-1, 0, 2, 0, 2, 0, 10, -3, 0, 0, 0, 0, 0, 0], [-5.0, 0.0, 1.0, 2.0]),
    // 661-670
    PlanetaryTerm::new([0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0], [-3.0, 28.0, 15.0, 2.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0], [5.0, 0.0, 1.0, -2.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, 9.0, 4.0, 1.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 0, -4, 8, -3, 0, 0, 0, 0], [0.0, 9.0, 4.0, -1.0]),
    PlanetaryTerm::new([-1, 0, 2, 0, 2, 0, 0, -4, 8, -3, 0, 0, 0, 0], [-126.0, -63.0, -27.0, 55.0]),
    PlanetaryTerm::new([2, 0, 2, -2, 2, 0, 0, -2, 0, 3, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 1, 0, 0, -2, 0, 3, 0, 0, 0, 0], [21.0, -11.0, -6.0, -11.0]),
    PlanetaryTerm::new([0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, -4.0, 0.0, 0.0]),
    PlanetaryTerm::new([-1, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0], [-21.0, -11.0, -6.0, 11.0]),
    PlanetaryTerm::new([-2, 0, 2, 2, 2, 0, 0, 2, 0, -2, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    // 671-680
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 2, -3, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 1, -1, 0, 0, 0, 0, 0, 0], [8.0, 0.0, 0.0, -4.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 0, 1, 0, -1, 0, 0, 0, 0], [-6.0, 0.0, 0.0, 3.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 2, -2, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([-1, 0, 2, 2, 2, 0, 0, -1, 0, 1, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 2, 0, -1, 1, 0, 0, 0, 0, 0, 0], [-3.0, 0.0, 0.0, 1.0]),
    PlanetaryTerm::new([-1, 0, 2, 2, 2, 0, 0, 2, 0, -3, 0, 0, 0, 0], [-5.0, 0.0, 0.0, 2.0]),
    PlanetaryTerm::new([2, 0, 2, 0, 2, 0, 0, 2, 0, -3, 0, 0, 0, 0], [24.0, -12.0, -5.0, -11.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 2, 0, 0, -4, 8, -3, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 2, 0, 0, 4, -8, 3, 0, 0, 0, 0], [0.0, 3.0, 1.0, 0.0]),
    // 681-687
    PlanetaryTerm::new([1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0], [0.0, 3.0, 2.0, 0.0]),
    PlanetaryTerm::new([0, 0, 2, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0], [-24.0, -12.0, -5.0, 10.0]),
    PlanetaryTerm::new([2, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0], [4.0, 0.0, -1.0, -2.0]),
    PlanetaryTerm::new([-1, 0, 2, 2, 2, 0, 0, 2, 0, -2, 0, 0, 0, 0], [13.0, 0.0, 0.0, -6.0]),
    PlanetaryTerm::new([-1, 0, 2, 2, 2, 0, 3, -3, 0, 0, 0, 0, 0, 0], [7.0, 0.0, 0.0, -3.0]),
    PlanetaryTerm::new([1, 0, 2, 0, 2, 0, 1, -1, 0, 0, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
    PlanetaryTerm::new([0, 0, 2, 2, 2, 0, 0, 2, 0, -2, 0, 0, 0, 0], [3.0, 0.0, 0.0, -1.0]),
];
