// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the self-update subsystem


mod fetcher_tests;
