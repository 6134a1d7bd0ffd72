mod helpers;
mod resources;
