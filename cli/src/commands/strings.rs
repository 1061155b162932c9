//! The `strings` command - arrays whose elements own heap data.
//!
//! Elements are handles into a [`StringPool`]. The array's destructor
//! releases a handle's string, so the pool's live count shows exactly which
//! elements have been destroyed.

use std::fmt;

use erased_array::{Array, ElementType};

use crate::cli::CountArgs;
use crate::common::CliResult;
use crate::common::pool::{HANDLE_SIZE, NULL_HANDLE, StringPool};

const HANDLE: ElementType = ElementType::named("string handle", HANDLE_SIZE);

/// Stringifier rendering a handle as its quoted text, or `NULL` once
/// released.
fn quoted(pool: &StringPool) -> impl Fn(&mut fmt::Formatter<'_>, &[u8]) -> fmt::Result + '_ {
    move |f, handle| match pool.get(handle) {
        Some(text) => write!(f, "\"{text}\""),
        None => f.write_str("NULL"),
    }
}

/// Run the strings command.
pub fn run(args: CountArgs) -> CliResult<()> {
    let pool = StringPool::new();
    let show = quoted(&pool);

    let mut original = Array::new(HANDLE)?;
    original.set_element_free(StringPool::releaser(&pool));
    for i in 0..args.count {
        original.push_back(&pool.intern(format!("String {i}"))?)?;
    }
    println!("original:  {}", original.display_with(&show));

    let mut exhausted = None;
    let mut copy = original.duplicate_with(|dst, src| {
        let text = pool.get(src).unwrap_or_default();
        match pool.intern(text) {
            Ok(handle) => dst.copy_from_slice(&handle),
            Err(error) => {
                dst.copy_from_slice(&NULL_HANDLE);
                exhausted.get_or_insert(error);
            }
        }
    })?;
    if let Some(error) = exhausted {
        return Err(error);
    }
    println!("live strings after duplicate_with: {}", pool.live());

    // `set` does not run the destructor, so the old string is released first.
    if let Some(old) = copy.get(0) {
        pool.release(old);
        copy.set(0, &pool.intern("Changed!")?)?;
    }
    println!("original:  {}", original.display_with(&show));
    println!("copy:      {}", copy.display_with(&show));

    let needle = pool.intern("String 2")?;
    let matches = copy.count_by(|a, b| pool.compare(a, b), &needle);
    pool.release(&needle);
    println!("copies of \"String 2\": {matches}");

    drop(original);
    println!("live strings after dropping the original: {}", pool.live());

    copy.clear()?;
    println!("live strings after clearing the copy: {}", pool.live());
    Ok(())
}
