use alimento_profile::{SignInInput, SignUpInput, User, sign_in, sign_up};
use anyhow::Result;

use alimento::store::{Store, keys};

pub fn register(
    config: alimento::config::Config,
    email: String,
    password: String,
    name: String,
) -> Result<()> {
    let user = sign_up(SignUpInput {
        email,
        password,
        name,
    })?;

    let store = Store::open(&config.storage.dir);
    store.save(keys::USER, &user)?;

    println!("Signed up as {} <{}>", user.name, user.email);

    Ok(())
}

pub fn login(config: alimento::config::Config, email: String, password: String) -> Result<()> {
    let user = sign_in(SignInInput { email, password })?;

    let store = Store::open(&config.storage.dir);
    store.save(keys::USER, &user)?;

    println!("Signed in as {} <{}>", user.name, user.email);

    Ok(())
}

pub fn logout(config: alimento::config::Config) -> Result<()> {
    let store = Store::open(&config.storage.dir);
    store.remove(keys::USER)?;

    println!("Signed out");

    Ok(())
}

pub fn whoami(config: alimento::config::Config) -> Result<()> {
    let store = Store::open(&config.storage.dir);

    match store.load::<User>(keys::USER) {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("Not signed in"),
    }

    Ok(())
}
