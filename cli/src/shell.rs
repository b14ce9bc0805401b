// furncart_cli/src/shell.rs

//! The interactive `shop` shell: one session, one command per line.

use crate::render;
use anyhow::{anyhow, bail, Context};
use furncart::{RoomSize, RoomStyle, RoomType, ShopSession, SubmissionOutcome};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

pub const HELP: &str = "\
Preferences:
  room <living_room|bedroom|dining_room|office>
  style <modern|classic|scandinavian|industrial>
  size <small|medium|large>
  budget <amount> | budget +N | budget -N   (N slider steps)
  image-url <url>          use a remote room picture
  image-file <path>        use a local room picture
  clear-image
  prefs                    show the current preferences
  submit                   get recommendations
Results and cart:
  list                     show the last bundle
  add <id> | add-all
  remove <id>
  qty <id> <n>             n <= 0 removes the item
  inc <id> | dec <id>
  cart
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
  Room(RoomType),
  Style(RoomStyle),
  Size(RoomSize),
  Budget(u32),
  NudgeBudget(i64),
  ImageUrl(String),
  ImageFile(PathBuf),
  ClearImage,
  Prefs,
  Submit,
  List,
  Add(String),
  AddAll,
  Remove(String),
  Qty(String, i64),
  Inc(String),
  Dec(String),
  Cart,
  Help,
  Quit,
}

fn choice<T: FromStr>(what: &str, raw: Option<&str>) -> anyhow::Result<T> {
  let raw = raw.ok_or_else(|| anyhow!("Missing {}.", what))?;
  raw
    .parse::<T>()
    .map_err(|_| anyhow!("Unknown {} '{}'. Type 'help' for the options.", what, raw))
}

fn id_arg(raw: Option<&str>) -> anyhow::Result<String> {
  raw.map(str::to_string).ok_or_else(|| anyhow!("Missing product id."))
}

impl FromStr for ShellCommand {
  type Err = anyhow::Error;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let cmd = match word.to_ascii_lowercase().as_str() {
      "room" => ShellCommand::Room(choice("room type", args.next())?),
      "style" => ShellCommand::Style(choice("style", args.next())?),
      "size" => ShellCommand::Size(choice("room size", args.next())?),
      "budget" => {
        let raw = args.next().ok_or_else(|| anyhow!("Missing budget."))?;
        if raw.starts_with('+') || raw.starts_with('-') {
          ShellCommand::NudgeBudget(raw.parse().with_context(|| format!("Invalid step count '{}'.", raw))?)
        } else {
          ShellCommand::Budget(raw.parse().with_context(|| format!("Invalid budget '{}'.", raw))?)
        }
      }
      "image-url" => ShellCommand::ImageUrl(rest.to_string()),
      "image-file" if !rest.is_empty() => ShellCommand::ImageFile(PathBuf::from(rest)),
      "image-file" => bail!("Missing image path."),
      "clear-image" => ShellCommand::ClearImage,
      "prefs" => ShellCommand::Prefs,
      "submit" => ShellCommand::Submit,
      "list" => ShellCommand::List,
      "add" => ShellCommand::Add(id_arg(args.next())?),
      "add-all" => ShellCommand::AddAll,
      "remove" => ShellCommand::Remove(id_arg(args.next())?),
      "qty" => {
        let id = id_arg(args.next())?;
        let raw = args.next().ok_or_else(|| anyhow!("Missing quantity."))?;
        ShellCommand::Qty(id, raw.parse().with_context(|| format!("Invalid quantity '{}'.", raw))?)
      }
      "inc" => ShellCommand::Inc(id_arg(args.next())?),
      "dec" => ShellCommand::Dec(id_arg(args.next())?),
      "cart" => ShellCommand::Cart,
      "help" | "?" => ShellCommand::Help,
      "quit" | "exit" => ShellCommand::Quit,
      other => bail!("Unknown command '{}'. Type 'help' for the list.", other),
    };
    Ok(cmd)
  }
}

/// Applies one command and returns what should be printed.
pub async fn execute(session: &mut ShopSession, cmd: ShellCommand) -> String {
  match cmd {
    ShellCommand::Room(room) => {
      session.form.room_type = room;
      format!("Room type: {}", room.label())
    }
    ShellCommand::Style(style) => {
      session.form.style = style;
      format!("Style: {}", style.label())
    }
    ShellCommand::Size(size) => {
      session.form.size = size;
      format!("Room size: {}", size.label())
    }
    ShellCommand::Budget(amount) => match session.form.set_budget(amount) {
      Ok(()) => format!("Budget: {}", render::money(f64::from(amount))),
      Err(e) => e.to_string(),
    },
    ShellCommand::NudgeBudget(steps) => {
      let budget = session.form.nudge_budget(steps);
      format!("Budget: {}", render::money(f64::from(budget)))
    }
    ShellCommand::ImageUrl(url) => {
      session.form.set_image_url(url);
      render::preferences(&session.form)
    }
    ShellCommand::ImageFile(path) => {
      session.form.set_image_file(path);
      render::preferences(&session.form)
    }
    ShellCommand::ClearImage => {
      session.form.clear_image();
      "Room image cleared.".to_string()
    }
    ShellCommand::Prefs => render::preferences(&session.form),
    ShellCommand::Submit => {
      println!("Fetching recommendations...");
      match session.submit().await {
        SubmissionOutcome::Applied => match session.recommendations() {
          Some(bundle) => render::bundle(bundle),
          None => String::new(),
        },
        SubmissionOutcome::Failed => format!("Failed to fetch recommendations: {}", session.error().unwrap_or("unknown error")),
        SubmissionOutcome::Superseded => "A newer request replaced this one.".to_string(),
      }
    }
    ShellCommand::List => match session.recommendations() {
      Some(bundle) => render::bundle(bundle),
      None => "No recommendations yet. Use 'submit'.".to_string(),
    },
    ShellCommand::Add(id) => match session.add_to_cart(&id) {
      Ok(qty) => format!("Added {} (quantity {}).", id, qty),
      Err(e) => e.to_string(),
    },
    ShellCommand::AddAll => {
      let added = session.add_all_to_cart();
      if added == 0 {
        "Nothing to add. Use 'submit' first.".to_string()
      } else {
        render::cart(session.cart())
      }
    }
    ShellCommand::Remove(id) => {
      if session.remove_from_cart(&id) {
        render::cart(session.cart())
      } else {
        format!("'{}' is not in the cart.", id)
      }
    }
    ShellCommand::Qty(id, n) => {
      session.update_quantity(&id, n);
      render::cart(session.cart())
    }
    ShellCommand::Inc(id) => {
      session.increment(&id);
      render::cart(session.cart())
    }
    ShellCommand::Dec(id) => {
      session.decrement(&id);
      render::cart(session.cart())
    }
    ShellCommand::Cart => render::cart(session.cart()),
    ShellCommand::Help => HELP.to_string(),
    ShellCommand::Quit => "Bye.".to_string(),
  }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(mut session: ShopSession) -> anyhow::Result<()> {
  println!("{}", render::header(session.cart_item_count()));
  println!("Type 'help' for commands.");
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  loop {
    print!("furncart> ");
    std::io::stdout().flush()?;
    let Some(line) = lines.next_line().await? else {
      break;
    };
    if line.trim().is_empty() {
      continue;
    }
    match line.parse::<ShellCommand>() {
      Ok(ShellCommand::Quit) => break,
      Ok(cmd) => {
        let output = execute(&mut session, cmd).await;
        println!("{}", output);
        println!("{}", render::header(session.cart_item_count()));
      }
      Err(e) => println!("{}", e),
    }
  }
  Ok(())
}
