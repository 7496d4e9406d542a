use super::constants::{FOOD_RADIUS, LARGE_FOOD_RADIUS_MULTIPLIER, LARGE_FOOD_VALUE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// A locally simulated snake. `segments[0]` is the head.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
  pub id: String,
  pub nickname: String,
  pub segments: Vec<Point>,
  pub color: String,
  pub is_player: bool,
  pub direction: Point,
  pub target_direction: Option<Point>,
  pub pending_growth: u32,
  pub score: u32,
}

impl Body {
  pub fn head(&self) -> Option<Point> {
    self.segments.first().copied()
  }

  pub fn tail(&self) -> Option<Point> {
    self.segments.last().copied()
  }

  pub fn eat(&mut self, food: &Food) {
    self.score += food.score();
    self.pending_growth += food.value;
  }
}

/// A body mirrored from another client. Only the fields the engine trusts are kept,
/// and every one of them tolerates being absent on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteBody {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub nickname: String,
  #[serde(default)]
  pub segments: Vec<Point>,
  #[serde(default)]
  pub color: String,
  #[serde(default)]
  pub score: u32,
}

impl RemoteBody {
  pub fn from_body(body: &Body) -> Self {
    Self {
      id: body.id.clone(),
      nickname: body.nickname.clone(),
      segments: body.segments.clone(),
      color: body.color.clone(),
      score: body.score,
    }
  }
}

/// Read-only view over every body taking part in a tick, local or mirrored.
#[derive(Debug, Clone, Copy)]
pub enum BodyRef<'a> {
  Local(&'a Body),
  Remote(&'a RemoteBody),
}

impl<'a> BodyRef<'a> {
  pub fn id(&self) -> &'a str {
    match self {
      BodyRef::Local(body) => &body.id,
      BodyRef::Remote(body) => &body.id,
    }
  }

  pub fn nickname(&self) -> &'a str {
    match self {
      BodyRef::Local(body) => &body.nickname,
      BodyRef::Remote(body) => &body.nickname,
    }
  }

  pub fn segments(&self) -> &'a [Point] {
    match self {
      BodyRef::Local(body) => &body.segments,
      BodyRef::Remote(body) => &body.segments,
    }
  }

  pub fn score(&self) -> u32 {
    match self {
      BodyRef::Local(body) => body.score,
      BodyRef::Remote(body) => body.score,
    }
  }

  pub fn head(&self) -> Option<Point> {
    self.segments().first().copied()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
  pub id: String,
  pub position: Point,
  pub color: String,
  pub value: u32,
}

impl Food {
  pub fn is_large(&self) -> bool {
    self.value == LARGE_FOOD_VALUE
  }

  pub fn radius(&self) -> f64 {
    if self.is_large() {
      FOOD_RADIUS * LARGE_FOOD_RADIUS_MULTIPLIER
    } else {
      FOOD_RADIUS
    }
  }

  pub fn score(&self) -> u32 {
    self.value * super::constants::SCORE_PER_FOOD_VALUE
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoisonPellet {
  pub id: String,
  pub position: Point,
  pub radius: f64,
  pub color: String,
  pub ring_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
  pub id: String,
  pub nickname: String,
  pub score: u32,
}
