//! Broadcast lookups over a small roster.
//!
//! Run with `RUST_LOG=debug` to see how each broadcast is merged.

use std::collections::BTreeMap;

use lookup::reflect::derive::Reflect;
use lookup::{Options, ReflectLookup, Resolved};

#[derive(Reflect)]
struct Member {
    name: String,
    role: String,
    aliases: Vec<String>,
    vehicle: Option<Box<Vehicle>>,
}

#[derive(Reflect)]
struct Vehicle {
    model: String,
}

#[derive(Reflect)]
struct Team {
    cast: Vec<Member>,
    ratings: BTreeMap<String, u8>,
}

fn member(name: &str, role: &str, aliases: &[&str], vehicle: Option<&str>) -> Member {
    Member {
        name: name.into(),
        role: role.into(),
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        vehicle: vehicle.map(|model| {
            Box::new(Vehicle {
                model: model.into(),
            })
        }),
    }
}

fn show(team: &Team, path: &str, options: &Options) {
    match team.lookup(path, options) {
        Ok(Resolved::Merged(merged)) => {
            log::info!("{path} => {} merged values", merged.len());
            println!("{path:<24} {merged:?}");
        }
        Ok(found) => println!("{path:<24} {found:?}"),
        Err(err) => println!("{path:<24} error: {err}"),
    }
}

fn main() {
    env_logger::init();

    let team = Team {
        cast: vec![
            member("John Smith", "Hannibal", &["Colonel"], None),
            member("Templeton Peck", "Face", &["Faceman", "Lt."], Some("Corvette")),
            member("H.M. Murdock", "Murdock", &[], None),
            member("B.A. Baracus", "B.A.", &["Bad Attitude"], Some("GMC Vandura")),
        ],
        ratings: BTreeMap::from([("season 1".to_string(), 9), ("season 5".to_string(), 6)]),
    };

    let options = Options::default();

    for path in [
        "cast.role",
        "cast.aliases",
        "cast[3].name",
        "cast.vehicle.model",
        "cast[1].aliases[0]",
        "ratings.season 1",
        "cast.salary",
        "cast[9].name",
        "cast[x].name",
    ] {
        show(&team, path, &options);
    }
}
