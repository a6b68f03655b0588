use std::thread;

use libration::improved_regula_falsi::{Config, Solution, solve_unobserved};
use libration::{BracketSet, Cr3bp, Region};

fn solve_all(system: Cr3bp, brackets: BracketSet) -> Vec<Solution> {
    let equation = system.equation();
    Region::ALL
        .into_iter()
        .map(|region| {
            solve_unobserved(&equation, brackets.get(region), &Config::default())
                .expect("should converge")
        })
        .collect()
}

#[test]
fn systems_solve_independently_on_separate_threads() {
    let earth_moon = Cr3bp::earth_moon();
    let sun_jupiter = Cr3bp::from_mass_ratio(9.537e-4).expect("valid mass ratio");
    let cases = [
        (earth_moon, BracketSet::earth_moon_widened()),
        (earth_moon, BracketSet::analytic(&earth_moon, 1e-5)),
        (sun_jupiter, BracketSet::analytic(&sun_jupiter, 1e-5)),
    ];

    let sequential: Vec<_> = cases
        .iter()
        .map(|(system, brackets)| solve_all(*system, *brackets))
        .collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = cases
            .iter()
            .map(|(system, brackets)| scope.spawn(move || solve_all(*system, *brackets)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("solver thread panicked"))
            .collect()
    });

    assert_eq!(sequential, parallel);
}
