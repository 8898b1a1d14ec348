
// Wrap core/alloc modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        slice,
        str,
    };

    pub use alloc::{
        borrow,
        string,
        vec,
    };
}
