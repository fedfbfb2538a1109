//! 生成密码哈希
//!
//! 运行: cargo run -p hanzi-api --example gen_password_hash -- <password>

use bcrypt::{hash, verify};

fn main() {
    let password = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "password123".to_string());

    match hash(&password, 12) {
        Ok(h) => {
            println!("Password: {} | Hash: {}", password, h);
            match verify(&password, &h) {
                Ok(true) => println!("  ✓ Verification passed"),
                Ok(false) => println!("  ✗ Verification failed"),
                Err(e) => println!("  ✗ Error: {}", e),
            }
        }
        Err(e) => eprintln!("Error hashing {}: {}", password, e),
    }
}
