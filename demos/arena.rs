use std::io::Read;

use rarena::{ArenaAllocator, PAGE_SIZE, print_alloc};

/// Waits until the user presses ENTER.
/// Useful when you want to inspect memory state with tools like `pmap`,
/// `htop`, `gdb`, or just follow how allocations carve up the arena.
fn block_until_enter_pressed() {
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

/// Prints how much of the arena is still free.
fn print_arena_state(
  label: &str,
  arena: &ArenaAllocator,
) {
  println!(
    "[{}] PID = {}, arena capacity = {} bytes, free = {} bytes",
    label,
    std::process::id(),
    arena.capacity(),
    arena.free_bytes(),
  );
}

fn main() {
  // Our arena allocator. It reserves one region from the OS up front and
  // carves every allocation out of it:
  // - each block starts with a small header
  // - the headers form a doubly linked list in address order
  // - freed blocks merge with free neighbors
  let mut arena = ArenaAllocator::with_pages(8).expect("could not reserve the arena");

  // Initial arena state: one spanning free block.
  print_arena_state("start", &arena);
  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 1) Allocate space for a u32 (4 bytes, padded to one machine word).
  // --------------------------------------------------------------------
  let first_block = arena.allocate(4).expect("arena exhausted");
  println!("\n[1] Allocate u32");
  print_alloc(4, first_block, &arena);

  unsafe {
    // Write something into the allocated memory to show it's usable.
    let first_ptr = first_block.cast::<u32>().as_ptr();
    first_ptr.write(0xDEADBEEF);
    println!("[1] Value written to first_block = 0x{:X}", first_ptr.read());
  }

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 2) Allocate 12 bytes (u8[12]).
  //    This shows how the allocator handles "odd-sized" allocations.
  // --------------------------------------------------------------------
  let second_block = arena.allocate(12).expect("arena exhausted");
  println!("\n[2] Allocate [u8; 12]");
  print_alloc(12, second_block, &arena);

  unsafe {
    // Initialize the block with a byte pattern.
    std::ptr::write_bytes(second_block.as_ptr(), 0xAB, 12);
    println!("[2] Initialized second block with 0xAB");
  }

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 3) Deallocate the first block.
  //
  //    The block is marked free and merged with any free neighbor. Its
  //    bytes become available again but stay inside the arena.
  // --------------------------------------------------------------------
  unsafe { arena.deallocate(first_block) };
  println!("\n[3] Deallocated first_block at {:?}", first_block);
  print_arena_state("after free", &arena);
  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 4) Allocate a small block (2 bytes) to see the allocator reuse the
  //    freed block: first-fit finds the hole left in step 3.
  // --------------------------------------------------------------------
  let third_block = arena.allocate(2).expect("arena exhausted");
  println!("\n[4] Allocate [u8; 2] (check reuse of freed block)");
  print_alloc(2, third_block, &arena);

  println!(
    "[4] third_block == first_block? {}",
    if third_block == first_block {
      "Yes, it reused the freed block"
    } else {
      "No, it allocated somewhere else"
    }
  );

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 5) Coalescing: free two neighboring blocks and watch their bytes
  //    fuse into one hole big enough for a larger request.
  // --------------------------------------------------------------------
  let left = arena.allocate(2 * 1024).expect("arena exhausted");
  let right = arena.allocate(2 * 1024).expect("arena exhausted");
  println!("\n[5] Allocate two neighboring 2 KiB blocks");
  print_alloc(2 * 1024, left, &arena);
  print_alloc(2 * 1024, right, &arena);

  unsafe {
    arena.deallocate(left);
    arena.deallocate(right);
  }
  println!("[5] Freed both; their bytes merged into one hole");
  print_arena_state("after coalescing", &arena);

  let merged = arena.allocate(4 * 1024).expect("coalesced hole should fit 4 KiB");
  println!("[5] A 4 KiB request fits where the two 2 KiB blocks were:");
  print_alloc(4 * 1024, merged, &arena);

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 6) Drive the arena to exhaustion.
  //
  //    The arena never grows: once no free block fits, allocate returns
  //    None instead of crashing.
  // --------------------------------------------------------------------
  println!("\n[6] Allocate {} byte chunks until the arena runs dry", PAGE_SIZE);

  let mut granted = 0;
  while arena.allocate(PAGE_SIZE).is_some() {
    granted += 1;
  }

  println!("[6] Got {} chunks, then None: the out-of-memory sentinel", granted);
  print_arena_state("exhausted", &arena);

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 7) End of demo.
  //
  //    Dropping the allocator unmaps the whole arena; the OS reclaims the
  //    region in one call.
  // --------------------------------------------------------------------
  println!("\n[7] End of example. Dropping the arena returns it to the OS.");
}
