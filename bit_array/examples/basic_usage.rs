use bit_array::{BitArray, BitArrayError};

fn main() {
    println!("=== Bit Array Examples ===\n");

    // Example 1: Building and editing a sequence
    if let Err(e) = example_editing() {
        println!("  error: {e}");
    }

    // Example 2: Seat reservations
    let _ = example_reservations();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_editing() -> Result<(), BitArrayError> {
    println!("Example 1: Editing a packed sequence");

    let mut bits = BitArray::from([true, false, true]);
    bits.insert(1, true)?;
    bits.append(false);
    let removed = bits.remove_at(0)?;

    println!("  Removed: {}", removed);
    println!("  Contents: {}", bits);
    println!("  {} of {} set", bits.cardinality(), bits.len());

    // Index 10 does not exist
    match bits.get(10) {
        Ok(v) => println!("  bits[10] = {}", v),
        Err(e) => println!("  {}", e),
    }
    println!();

    Ok(())
}

fn example_reservations() -> Result<(), BitArrayError> {
    println!("Example 2: Theatre seats (true = reserved)");

    let mut seats = BitArray::with_repeated(120, false);
    for seat in [3, 4, 5, 60, 61, 119] {
        seats.set(seat, true)?;
    }
    seats.toggle(4)?;

    println!("  Reserved: {}", seats.cardinality());
    println!("  Free:     {}", seats.count_zeros());
    let first_free = seats.iter().position(|taken| !taken);
    println!("  First free seat: {:?}", first_free);
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    let standard: Vec<bool> = (0..count).map(|i| i % 7 == 0).collect();
    let standard_bytes = standard.len() * size_of::<bool>();

    let packed = BitArray::from(standard.as_slice());
    let packed_bytes = packed.words().len() * size_of::<u64>();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} booleans:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  BitArray:  {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
