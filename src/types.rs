pub type Int = i32;
