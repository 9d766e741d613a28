use super::{EntityId, Heading, Position};

/// Aggregate state for every entity in the world.
///
/// The general roster is `props` plus `agents`; `agents` alone is the
/// live-agent roster. Removing an agent from `agents` therefore removes it
/// from both rosters in one step.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub props: Vec<PropState>,
    pub agents: Vec<AgentState>,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a reference to a live agent by ID.
    pub fn agent(&self, id: EntityId) -> Option<&AgentState> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    /// Returns a mutable reference to a live agent by ID.
    pub fn agent_mut(&mut self, id: EntityId) -> Option<&mut AgentState> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }

    /// Removes an agent from the roster and returns its final state.
    pub fn remove_agent(&mut self, id: EntityId) -> Option<AgentState> {
        let index = self.agents.iter().position(|agent| agent.id == id)?;
        Some(self.agents.remove(index))
    }

    /// Removes a prop from the roster and returns it.
    pub fn remove_prop(&mut self, id: EntityId) -> Option<PropState> {
        let index = self.props.iter().position(|prop| prop.id == id)?;
        Some(self.props.remove(index))
    }

    /// All props exactly at `position`, in placement order.
    pub fn props_at(&self, position: Position) -> impl Iterator<Item = &PropState> + '_ {
        self.props
            .iter()
            .filter(move |prop| prop.position == position)
    }

    /// All props within Euclidean `radius` of `position`.
    pub fn props_near(
        &self,
        position: Position,
        radius: u32,
    ) -> impl Iterator<Item = &PropState> + '_ {
        let radius2 = i64::from(radius) * i64::from(radius);
        self.props
            .iter()
            .filter(move |prop| prop.position.distance_squared(position) <= radius2)
    }

    /// First prop of `kind` at `position`.
    pub fn find_at(&self, kind: PropKind, position: Position) -> Option<&PropState> {
        self.props_at(position).find(|prop| prop.kind == kind)
    }

    /// Live agents exactly at `position`.
    pub fn agents_at(&self, position: Position) -> impl Iterator<Item = &AgentState> + '_ {
        self.agents
            .iter()
            .filter(move |agent| agent.position == position)
    }

    /// Total number of entities currently in the world.
    pub fn len(&self) -> usize {
        self.props.len() + self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.agents.is_empty()
    }
}

/// Static occupants of a cell: hazards, rewards and walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropKind {
    /// Impassable; a forward move into it bumps.
    Wall,
    /// Lethal on contact.
    Pit,
    /// Collectible reward.
    Gold,
    /// Lethal on contact, killable by an arrow.
    Wumpus,
}

impl PropKind {
    /// Whether walking into this prop kills the agent.
    pub const fn is_lethal(self) -> bool {
        matches!(self, PropKind::Pit | PropKind::Wumpus)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropState {
    pub id: EntityId,
    pub position: Position,
    pub kind: PropKind,
}

impl PropState {
    pub fn new(id: EntityId, position: Position, kind: PropKind) -> Self {
        Self { id, position, kind }
    }
}

/// Items an agent can carry in its held slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Gold,
}

/// Mobile agent placed in the world.
///
/// The decision program driving the agent lives outside the core; the state
/// here is everything the engine needs to execute actions and build percepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id: EntityId,
    /// Display name used in event log lines.
    pub name: String,
    pub position: Position,
    pub heading: Heading,
    pub alive: bool,
    /// Held-item slot; holds at most one item.
    pub holding: Option<ItemKind>,
    /// Set by a forward move blocked by a wall. Cleared at the start of the
    /// next tick, after that tick's percepts were taken.
    pub bump: bool,
    /// Remaining arrows, `None` when the quiver is unlimited.
    pub arrows: Option<u32>,
}

impl AgentState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, heading: Heading) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            heading,
            alive: true,
            holding: None,
            bump: false,
            arrows: None,
        }
    }

    pub fn with_arrows(mut self, arrows: Option<u32>) -> Self {
        self.arrows = arrows;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Placement request accepted by [`crate::GameState::add_entity`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntitySpec {
    Wall,
    Pit,
    Gold,
    Wumpus,
    Agent { name: String },
}

impl EntitySpec {
    pub fn agent(name: impl Into<String>) -> Self {
        Self::Agent { name: name.into() }
    }

    /// Prop kind for static entities, `None` for agents.
    pub fn prop_kind(&self) -> Option<PropKind> {
        match self {
            EntitySpec::Wall => Some(PropKind::Wall),
            EntitySpec::Pit => Some(PropKind::Pit),
            EntitySpec::Gold => Some(PropKind::Gold),
            EntitySpec::Wumpus => Some(PropKind::Wumpus),
            EntitySpec::Agent { .. } => None,
        }
    }
}

impl From<PropKind> for EntitySpec {
    fn from(kind: PropKind) -> Self {
        match kind {
            PropKind::Wall => EntitySpec::Wall,
            PropKind::Pit => EntitySpec::Pit,
            PropKind::Gold => EntitySpec::Gold,
            PropKind::Wumpus => EntitySpec::Wumpus,
        }
    }
}
