//! Standalone runner that demonstrates the puzzle algorithms in `src/`

use puzzles::computation_map::PUZZLES_COMPUTATION_MAP;
use puzzles::data_structures::digit_list::{DigitError, DigitList};
use puzzles::numerical::digit_addition::add;
use puzzles::searching::pair_sum::find_pair;

fn main() -> Result<(), DigitError> {
    env_logger::init();

    println!("=== Puzzles Computation Map ===");
    for (path, comp_type, determinism) in PUZZLES_COMPUTATION_MAP.iter() {
        println!("{:<40} | {:<28} | {}", path, comp_type, determinism);
    }

    println!("\n=== Sanity Check Examples ===");

    // Pair-sum example
    {
        let numbers = [1, 5, 2, 7, 11, 15];
        println!("Pair sum example: {:?}", find_pair(&numbers, 9));
    }

    // Digit-addition example
    {
        let a = DigitList::from_digits(&[2, 4, 3])?;
        let b = DigitList::from_digits(&[5, 6, 4])?;
        let total = add(&a, &b);
        println!(
            "Digit addition example: {:?} (value {})",
            total.iter().collect::<Vec<u8>>(),
            total.value()
        );
    }

    Ok(())
}
