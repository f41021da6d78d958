
use melontier_test_utils::prelude::*;

use super::*;

use crate::model::tier::{CombatTitle, Region, Tier, TierLevel};
