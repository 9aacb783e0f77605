mod api_roundtrip;
mod failure_handling;
mod tui_rendering;
