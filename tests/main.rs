// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

mod integration;
