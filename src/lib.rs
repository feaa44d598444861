//! # rarena - A Fixed-Size Arena Allocator Library
//!
//! This crate provides a simple **first-fit arena allocator** implementation
//! in Rust that manages a single memory region reserved up front with the
//! `mmap` system call.
//!
//! ## Overview
//!
//! The allocator reserves one contiguous arena from the OS and serves every
//! request out of it:
//!
//! ```text
//!   Arena Allocator Concept:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      ARENA (one mmap region)                         │
//!   │                                                                      │
//!   │   ┌────┬──────┬────┬─────┬────┬──────────┬────┬──────────────────┐   │
//!   │   │ H  │ A1   │ H  │ A2  │ H  │  free    │ H  │      free        │   │
//!   │   └────┴──────┴────┴─────┴────┴──────────┴────┴──────────────────┘   │
//!   │     ▲                           ▲                                    │
//!   │     │                           │                                    │
//!   │   block header            freed blocks are merged with free          │
//!   │   (size / free / links)   neighbors so holes grow back together      │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Allocation walks the blocks in address order and takes the first free
//!   one that is large enough (first-fit), splitting off the unused tail.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rarena
//!   ├── align      - Alignment macros (align!, align_to!)
//!   ├── block      - Block metadata structure (internal)
//!   ├── arena      - ArenaAllocator implementation
//!   └── error      - Arena reservation errors
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rarena::ArenaAllocator;
//!
//! fn main() {
//!     let mut arena = ArenaAllocator::with_pages(16).expect("reservation failed");
//!
//!     // Allocate memory for a u64
//!     let block = arena.allocate(8).expect("arena exhausted");
//!
//!     unsafe {
//!         // Use the memory
//!         let value = block.cast::<u64>().as_ptr();
//!         value.write(42);
//!         assert_eq!(value.read(), 42);
//!
//!         // Free the memory
//!         arena.deallocate(block);
//!     }
//! }
//! ```
//!
//! ## How It Works
//!
//! The arena is mapped once, anonymously and process-private:
//!
//! ```text
//!   Arena Lifecycle:
//!
//!   with_pages(n) ──► mmap(n * 4096 bytes) ──► one spanning free block
//!                                                        │
//!                         allocate ◄──────────────────────┤
//!                            │   splits off unused tails  │
//!                            ▼                            │
//!                         deallocate ─────────────────────┘
//!                            merges free neighbors back together
//!
//!   Drop ──► munmap releases the whole arena in one call.
//! ```
//!
//! Each block starts with a header followed by the caller's bytes:
//!
//! ```text
//!   Single Block:
//!   ┌───────────────────────┬────────────────────────────────┐
//!   │    Block Header       │         User Data              │
//!   │  ┌─────────────────┐  │                                │
//!   │  │ size: N         │  │  ┌──────────────────────────┐  │
//!   │  │ is_free: false  │  │  │                          │  │
//!   │  │ next: offset    │  │  │     N bytes usable       │  │
//!   │  │ prev: offset    │  │  │                          │  │
//!   │  └─────────────────┘  │  └──────────────────────────┘  │
//!   │      32 bytes         │                                │
//!   └───────────────────────┴────────────────────────────────┘
//!                           ▲
//!                           └── Pointer returned to user
//! ```
//!
//! The headers form a doubly linked list in address order. `next` and
//! `prev` are byte offsets into the arena, so every link can be bounds
//! checked against the region the allocator owns.
//!
//! ## Features
//!
//! - **Simple implementation**: First-fit search, splitting, coalescing
//! - **One OS interaction**: A single `mmap` up front, `munmap` on drop
//! - **Bounded memory**: The arena never grows; exhaustion is a value, not a crash
//! - **Multiple arenas**: Each allocator owns its region independently
//!
//! ## Limitations
//!
//! - **Single-threaded only**: No synchronization primitives; wrap the
//!   allocator in a `Mutex` to share it
//! - **No arena growth**: Requests beyond the remaining free space return `None`
//! - **Word alignment only**: Payloads are aligned to the machine word,
//!   nothing stricter
//! - **Unix-only**: Requires `libc` and `mmap` (POSIX systems)
//!
//! ## Safety
//!
//! Allocation itself is safe; using the returned pointers and freeing them
//! is not. `deallocate` trusts the caller to pass back a pointer obtained
//! from the same arena, exactly once.

pub mod align;
mod arena;
mod block;
mod error;

pub use arena::{ArenaAllocator, PAGE_SIZE, print_alloc};
pub use error::ArenaError;
