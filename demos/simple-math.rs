extern crate biginteger;
use biginteger::*;
use std::str::FromStr;

fn main() {
    println!("Hello, Big Integers!");
    let input = "999999999999999999999";
    let n = BigInteger::from_str(&input).unwrap();
    println!("Input: {}", n);

    let sum = n.try_add(&BigInteger::from(1u8)).unwrap();
    println!("plus one: {}", sum);

    let bi_from_prim = BigInteger::from_i64(-12345678);
    println!("From Prim: {}", bi_from_prim.unwrap());

    let a = BigInteger::from(48u8);
    let b = BigInteger::from(18u8);
    println!("gcd({}, {}) = {}", a, b, a.gcd(&b).unwrap());
    println!("lcm({}, {}) = {}", a, b, a.lcm(&b).unwrap());

    let f = BigInteger::from(20u8).factorial().unwrap();
    println!("20! = {}", f);

    let fib = BigInteger::nth_fibonacci(&BigInteger::from(50u8)).unwrap();
    println!("F(50) = {}", fib);

    let beef = BigInteger::parse_bytes(b"BEEF", 16).unwrap();
    println!("0xBEEF = {} (binary {})", beef, beef.to_str_radix(2));

    let maybe_prime = BigInteger::from(7919u32);
    if maybe_prime.is_prime().unwrap() {
        println!("{} is prime", maybe_prime);
    } else {
        println!("{} is composite", maybe_prime);
    }

    let pal = BigInteger::from(12321u32);
    println!("{} palindrome? {}", pal, pal.is_palindrome());

    let x = BigInteger::from(2000000000000000000u64);
    println!("isqrt({}) = {}", x, x.sqrt().unwrap());

    let q = &x / &BigInteger::from(7u8);
    let r = &x % &BigInteger::from(7u8);
    println!("divide: {} rem {}", q, r);
}
